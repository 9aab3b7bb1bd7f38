use std::ffi::{OsStr, OsString};
use std::os::windows::ffi::{OsStrExt, OsStringExt};

/// NUL-terminated UTF-16 copy of `input`, ready to hand to a `W` API.
pub(crate) fn to_wide(input: impl AsRef<OsStr>) -> Vec<u16> {
    input.as_ref()
        .encode_wide()
        .chain(Some(0x0_u16))
        .collect()
}

pub(crate) fn from_wide(input: &[u16]) -> OsString {
    OsString::from_wide(input)
}

#[cfg(test)]
mod tests {
    use crate::string::{from_wide, to_wide};

    #[test]
    fn to_wide_appends_terminator() {
        let wide = to_wide("gl");

        assert_eq!(wide, vec![0x67, 0x6c, 0x0]);
    }

    #[test]
    fn from_wide_round_trips_without_terminator() {
        let wide = to_wide("opengl32.dll");

        assert_eq!(from_wide(&wide[..wide.len() - 1]), "opengl32.dll");
    }
}
