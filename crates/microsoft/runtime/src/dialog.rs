use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

use crate::string::to_wide;

/// Shows a blocking error message box. Returns once the user dismisses it.
pub fn show_error(caption: &str, text: &str) {
    let caption = to_wide(caption);
    let text = to_wide(text);

    unsafe {
        let _ = MessageBoxW(
            HWND(0),
            PCWSTR(text.as_ptr()),
            PCWSTR(caption.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}
