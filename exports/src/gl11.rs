//! Every OpenGL 1.1 export apart from the hooked ones in `hooked.rs`.

use std::ffi::c_void;

use glproxy_interception::ffi::*;

gl_entry_points! {
    fn glAccum(op: GLenum, value: GLfloat);
    fn glAlphaFunc(func: GLenum, reference: GLclampf);
    fn glAreTexturesResident(n: GLsizei, textures: *const GLuint, residences: *mut GLboolean) -> GLboolean;
    fn glArrayElement(i: GLint);
    fn glBegin(mode: GLenum);
    fn glBindTexture(target: GLenum, texture: GLuint);
    fn glBitmap(width: GLsizei, height: GLsizei, xorig: GLfloat, yorig: GLfloat, xmove: GLfloat, ymove: GLfloat, bitmap: *const GLubyte);
    fn glBlendFunc(sfactor: GLenum, dfactor: GLenum);
    fn glCallList(list: GLuint);
    fn glCallLists(n: GLsizei, type_: GLenum, lists: *const c_void);
    fn glClearAccum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn glClearColor(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf);
    fn glClearDepth(depth: GLclampd);
    fn glClearIndex(c: GLfloat);
    fn glClearStencil(s: GLint);
    fn glClipPlane(plane: GLenum, equation: *const GLdouble);
    fn glColor3b(red: GLbyte, green: GLbyte, blue: GLbyte);
    fn glColor3bv(v: *const GLbyte);
    fn glColor3d(red: GLdouble, green: GLdouble, blue: GLdouble);
    fn glColor3dv(v: *const GLdouble);
    fn glColor3f(red: GLfloat, green: GLfloat, blue: GLfloat);
    fn glColor3fv(v: *const GLfloat);
    fn glColor3i(red: GLint, green: GLint, blue: GLint);
    fn glColor3iv(v: *const GLint);
    fn glColor3s(red: GLshort, green: GLshort, blue: GLshort);
    fn glColor3sv(v: *const GLshort);
    fn glColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
    fn glColor3ubv(v: *const GLubyte);
    fn glColor3ui(red: GLuint, green: GLuint, blue: GLuint);
    fn glColor3uiv(v: *const GLuint);
    fn glColor3us(red: GLushort, green: GLushort, blue: GLushort);
    fn glColor3usv(v: *const GLushort);
    fn glColor4b(red: GLbyte, green: GLbyte, blue: GLbyte, alpha: GLbyte);
    fn glColor4bv(v: *const GLbyte);
    fn glColor4d(red: GLdouble, green: GLdouble, blue: GLdouble, alpha: GLdouble);
    fn glColor4dv(v: *const GLdouble);
    fn glColor4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
    fn glColor4fv(v: *const GLfloat);
    fn glColor4i(red: GLint, green: GLint, blue: GLint, alpha: GLint);
    fn glColor4iv(v: *const GLint);
    fn glColor4s(red: GLshort, green: GLshort, blue: GLshort, alpha: GLshort);
    fn glColor4sv(v: *const GLshort);
    fn glColor4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
    fn glColor4ubv(v: *const GLubyte);
    fn glColor4ui(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint);
    fn glColor4uiv(v: *const GLuint);
    fn glColor4us(red: GLushort, green: GLushort, blue: GLushort, alpha: GLushort);
    fn glColor4usv(v: *const GLushort);
    fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
    fn glColorMaterial(face: GLenum, mode: GLenum);
    fn glColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glCopyPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, type_: GLenum);
    fn glCopyTexImage1D(target: GLenum, level: GLint, internal_format: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
    fn glCopyTexImage2D(target: GLenum, level: GLint, internal_format: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
    fn glCopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
    fn glCopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn glCullFace(mode: GLenum);
    fn glDeleteLists(list: GLuint, range: GLsizei);
    fn glDeleteTextures(n: GLsizei, textures: *const GLuint);
    fn glDepthFunc(func: GLenum);
    fn glDepthMask(flag: GLboolean);
    fn glDepthRange(z_near: GLclampd, z_far: GLclampd);
    fn glDisable(cap: GLenum);
    fn glDisableClientState(array: GLenum);
    fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei);
    fn glDrawBuffer(mode: GLenum);
    fn glDrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void);
    fn glDrawPixels(width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn glEdgeFlag(flag: GLboolean);
    fn glEdgeFlagPointer(stride: GLsizei, pointer: *const c_void);
    fn glEdgeFlagv(flag: *const GLboolean);
    fn glEnable(cap: GLenum);
    fn glEnableClientState(array: GLenum);
    fn glEnd();
    fn glEndList();
    fn glEvalCoord1d(u: GLdouble);
    fn glEvalCoord1dv(u: *const GLdouble);
    fn glEvalCoord1f(u: GLfloat);
    fn glEvalCoord1fv(u: *const GLfloat);
    fn glEvalCoord2d(u: GLdouble, v: GLdouble);
    fn glEvalCoord2dv(u: *const GLdouble);
    fn glEvalCoord2f(u: GLfloat, v: GLfloat);
    fn glEvalCoord2fv(u: *const GLfloat);
    fn glEvalMesh1(mode: GLenum, i1: GLint, i2: GLint);
    fn glEvalMesh2(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint);
    fn glEvalPoint1(i: GLint);
    fn glEvalPoint2(i: GLint, j: GLint);
    fn glFeedbackBuffer(size: GLsizei, type_: GLenum, buffer: *mut GLfloat);
    fn glFinish();
    fn glFlush();
    fn glFogf(pname: GLenum, param: GLfloat);
    fn glFogfv(pname: GLenum, params: *const GLfloat);
    fn glFogi(pname: GLenum, param: GLint);
    fn glFogiv(pname: GLenum, params: *const GLint);
    fn glFrontFace(mode: GLenum);
    fn glFrustum(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, z_near: GLdouble, z_far: GLdouble);
    fn glGenLists(range: GLsizei) -> GLuint;
    fn glGenTextures(n: GLsizei, textures: *mut GLuint);
    fn glGetBooleanv(pname: GLenum, params: *mut GLboolean);
    fn glGetClipPlane(plane: GLenum, equation: *mut GLdouble);
    fn glGetDoublev(pname: GLenum, params: *mut GLdouble);
    fn glGetError() -> GLenum;
    fn glGetFloatv(pname: GLenum, params: *mut GLfloat);
    fn glGetIntegerv(pname: GLenum, params: *mut GLint);
    fn glGetLightfv(light: GLenum, pname: GLenum, params: *mut GLfloat);
    fn glGetLightiv(light: GLenum, pname: GLenum, params: *mut GLint);
    fn glGetMapdv(target: GLenum, query: GLenum, v: *mut GLdouble);
    fn glGetMapfv(target: GLenum, query: GLenum, v: *mut GLfloat);
    fn glGetMapiv(target: GLenum, query: GLenum, v: *mut GLint);
    fn glGetMaterialfv(face: GLenum, pname: GLenum, params: *mut GLfloat);
    fn glGetMaterialiv(face: GLenum, pname: GLenum, params: *mut GLint);
    fn glGetPixelMapfv(map: GLenum, values: *mut GLfloat);
    fn glGetPixelMapuiv(map: GLenum, values: *mut GLuint);
    fn glGetPixelMapusv(map: GLenum, values: *mut GLushort);
    fn glGetPointerv(pname: GLenum, params: *mut *mut c_void);
    fn glGetPolygonStipple(mask: *mut GLubyte);
    fn glGetString(name: GLenum) -> *const GLubyte;
    fn glGetTexEnvfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    fn glGetTexEnviv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn glGetTexGendv(coord: GLenum, pname: GLenum, params: *mut GLdouble);
    fn glGetTexGenfv(coord: GLenum, pname: GLenum, params: *mut GLfloat);
    fn glGetTexGeniv(coord: GLenum, pname: GLenum, params: *mut GLint);
    fn glGetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void);
    fn glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
    fn glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
    fn glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
    fn glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
    fn glHint(target: GLenum, mode: GLenum);
    fn glIndexMask(mask: GLuint);
    fn glIndexPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glIndexd(c: GLdouble);
    fn glIndexdv(c: *const GLdouble);
    fn glIndexf(c: GLfloat);
    fn glIndexfv(c: *const GLfloat);
    fn glIndexi(c: GLint);
    fn glIndexiv(c: *const GLint);
    fn glIndexs(c: GLshort);
    fn glIndexsv(c: *const GLshort);
    fn glIndexub(c: GLubyte);
    fn glIndexubv(c: *const GLubyte);
    fn glInitNames();
    fn glInterleavedArrays(format: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glIsEnabled(cap: GLenum) -> GLboolean;
    fn glIsList(list: GLuint) -> GLboolean;
    fn glIsTexture(texture: GLuint) -> GLboolean;
    fn glLightModelf(pname: GLenum, param: GLfloat);
    fn glLightModelfv(pname: GLenum, params: *const GLfloat);
    fn glLightModeli(pname: GLenum, param: GLint);
    fn glLightModeliv(pname: GLenum, params: *const GLint);
    fn glLightf(light: GLenum, pname: GLenum, param: GLfloat);
    fn glLightfv(light: GLenum, pname: GLenum, params: *const GLfloat);
    fn glLighti(light: GLenum, pname: GLenum, param: GLint);
    fn glLightiv(light: GLenum, pname: GLenum, params: *const GLint);
    fn glLineStipple(factor: GLint, pattern: GLushort);
    fn glLineWidth(width: GLfloat);
    fn glListBase(base: GLuint);
    fn glLoadIdentity();
    fn glLoadMatrixd(m: *const GLdouble);
    fn glLoadMatrixf(m: *const GLfloat);
    fn glLoadName(name: GLuint);
    fn glLogicOp(opcode: GLenum);
    fn glMap1d(target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint, points: *const GLdouble);
    fn glMap1f(target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint, points: *const GLfloat);
    fn glMap2d(target: GLenum, u1: GLdouble, u2: GLdouble, ustride: GLint, uorder: GLint, v1: GLdouble, v2: GLdouble, vstride: GLint, vorder: GLint, points: *const GLdouble);
    fn glMap2f(target: GLenum, u1: GLfloat, u2: GLfloat, ustride: GLint, uorder: GLint, v1: GLfloat, v2: GLfloat, vstride: GLint, vorder: GLint, points: *const GLfloat);
    fn glMapGrid1d(un: GLint, u1: GLdouble, u2: GLdouble);
    fn glMapGrid1f(un: GLint, u1: GLfloat, u2: GLfloat);
    fn glMapGrid2d(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble);
    fn glMapGrid2f(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat);
    fn glMaterialf(face: GLenum, pname: GLenum, param: GLfloat);
    fn glMaterialfv(face: GLenum, pname: GLenum, params: *const GLfloat);
    fn glMateriali(face: GLenum, pname: GLenum, param: GLint);
    fn glMaterialiv(face: GLenum, pname: GLenum, params: *const GLint);
    fn glMatrixMode(mode: GLenum);
    fn glMultMatrixd(m: *const GLdouble);
    fn glMultMatrixf(m: *const GLfloat);
    fn glNewList(list: GLuint, mode: GLenum);
    fn glNormal3b(nx: GLbyte, ny: GLbyte, nz: GLbyte);
    fn glNormal3bv(v: *const GLbyte);
    fn glNormal3d(nx: GLdouble, ny: GLdouble, nz: GLdouble);
    fn glNormal3dv(v: *const GLdouble);
    fn glNormal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat);
    fn glNormal3fv(v: *const GLfloat);
    fn glNormal3i(nx: GLint, ny: GLint, nz: GLint);
    fn glNormal3iv(v: *const GLint);
    fn glNormal3s(nx: GLshort, ny: GLshort, nz: GLshort);
    fn glNormal3sv(v: *const GLshort);
    fn glNormalPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glOrtho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, z_near: GLdouble, z_far: GLdouble);
    fn glPassThrough(token: GLfloat);
    fn glPixelMapfv(map: GLenum, mapsize: GLsizei, values: *const GLfloat);
    fn glPixelMapuiv(map: GLenum, mapsize: GLsizei, values: *const GLuint);
    fn glPixelMapusv(map: GLenum, mapsize: GLsizei, values: *const GLushort);
    fn glPixelStoref(pname: GLenum, param: GLfloat);
    fn glPixelStorei(pname: GLenum, param: GLint);
    fn glPixelTransferf(pname: GLenum, param: GLfloat);
    fn glPixelTransferi(pname: GLenum, param: GLint);
    fn glPixelZoom(xfactor: GLfloat, yfactor: GLfloat);
    fn glPointSize(size: GLfloat);
    fn glPolygonMode(face: GLenum, mode: GLenum);
    fn glPolygonOffset(factor: GLfloat, units: GLfloat);
    fn glPolygonStipple(mask: *const GLubyte);
    fn glPopAttrib();
    fn glPopClientAttrib();
    fn glPopMatrix();
    fn glPopName();
    fn glPrioritizeTextures(n: GLsizei, textures: *const GLuint, priorities: *const GLclampf);
    fn glPushAttrib(mask: GLbitfield);
    fn glPushClientAttrib(mask: GLbitfield);
    fn glPushMatrix();
    fn glPushName(name: GLuint);
    fn glRasterPos2d(x: GLdouble, y: GLdouble);
    fn glRasterPos2dv(v: *const GLdouble);
    fn glRasterPos2f(x: GLfloat, y: GLfloat);
    fn glRasterPos2fv(v: *const GLfloat);
    fn glRasterPos2i(x: GLint, y: GLint);
    fn glRasterPos2iv(v: *const GLint);
    fn glRasterPos2s(x: GLshort, y: GLshort);
    fn glRasterPos2sv(v: *const GLshort);
    fn glRasterPos3d(x: GLdouble, y: GLdouble, z: GLdouble);
    fn glRasterPos3dv(v: *const GLdouble);
    fn glRasterPos3f(x: GLfloat, y: GLfloat, z: GLfloat);
    fn glRasterPos3fv(v: *const GLfloat);
    fn glRasterPos3i(x: GLint, y: GLint, z: GLint);
    fn glRasterPos3iv(v: *const GLint);
    fn glRasterPos3s(x: GLshort, y: GLshort, z: GLshort);
    fn glRasterPos3sv(v: *const GLshort);
    fn glRasterPos4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    fn glRasterPos4dv(v: *const GLdouble);
    fn glRasterPos4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn glRasterPos4fv(v: *const GLfloat);
    fn glRasterPos4i(x: GLint, y: GLint, z: GLint, w: GLint);
    fn glRasterPos4iv(v: *const GLint);
    fn glRasterPos4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
    fn glRasterPos4sv(v: *const GLshort);
    fn glReadBuffer(mode: GLenum);
    fn glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void);
    fn glRectd(x1: GLdouble, y1: GLdouble, x2: GLdouble, y2: GLdouble);
    fn glRectdv(v1: *const GLdouble, v2: *const GLdouble);
    fn glRectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat);
    fn glRectfv(v1: *const GLfloat, v2: *const GLfloat);
    fn glRecti(x1: GLint, y1: GLint, x2: GLint, y2: GLint);
    fn glRectiv(v1: *const GLint, v2: *const GLint);
    fn glRects(x1: GLshort, y1: GLshort, x2: GLshort, y2: GLshort);
    fn glRectsv(v1: *const GLshort, v2: *const GLshort);
    fn glRenderMode(mode: GLenum) -> GLint;
    fn glRotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble);
    fn glRotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
    fn glScaled(x: GLdouble, y: GLdouble, z: GLdouble);
    fn glScalef(x: GLfloat, y: GLfloat, z: GLfloat);
    fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    fn glSelectBuffer(size: GLsizei, buffer: *mut GLuint);
    fn glShadeModel(mode: GLenum);
    fn glStencilFunc(func: GLenum, reference: GLint, mask: GLuint);
    fn glStencilMask(mask: GLuint);
    fn glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
    fn glTexCoord1d(s: GLdouble);
    fn glTexCoord1dv(v: *const GLdouble);
    fn glTexCoord1f(s: GLfloat);
    fn glTexCoord1fv(v: *const GLfloat);
    fn glTexCoord1i(s: GLint);
    fn glTexCoord1iv(v: *const GLint);
    fn glTexCoord1s(s: GLshort);
    fn glTexCoord1sv(v: *const GLshort);
    fn glTexCoord2d(s: GLdouble, t: GLdouble);
    fn glTexCoord2dv(v: *const GLdouble);
    fn glTexCoord2f(s: GLfloat, t: GLfloat);
    fn glTexCoord2fv(v: *const GLfloat);
    fn glTexCoord2i(s: GLint, t: GLint);
    fn glTexCoord2iv(v: *const GLint);
    fn glTexCoord2s(s: GLshort, t: GLshort);
    fn glTexCoord2sv(v: *const GLshort);
    fn glTexCoord3d(s: GLdouble, t: GLdouble, r: GLdouble);
    fn glTexCoord3dv(v: *const GLdouble);
    fn glTexCoord3f(s: GLfloat, t: GLfloat, r: GLfloat);
    fn glTexCoord3fv(v: *const GLfloat);
    fn glTexCoord3i(s: GLint, t: GLint, r: GLint);
    fn glTexCoord3iv(v: *const GLint);
    fn glTexCoord3s(s: GLshort, t: GLshort, r: GLshort);
    fn glTexCoord3sv(v: *const GLshort);
    fn glTexCoord4d(s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble);
    fn glTexCoord4dv(v: *const GLdouble);
    fn glTexCoord4f(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
    fn glTexCoord4fv(v: *const GLfloat);
    fn glTexCoord4i(s: GLint, t: GLint, r: GLint, q: GLint);
    fn glTexCoord4iv(v: *const GLint);
    fn glTexCoord4s(s: GLshort, t: GLshort, r: GLshort, q: GLshort);
    fn glTexCoord4sv(v: *const GLshort);
    fn glTexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glTexEnvf(target: GLenum, pname: GLenum, param: GLfloat);
    fn glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    fn glTexEnvi(target: GLenum, pname: GLenum, param: GLint);
    fn glTexEnviv(target: GLenum, pname: GLenum, params: *const GLint);
    fn glTexGend(coord: GLenum, pname: GLenum, param: GLdouble);
    fn glTexGendv(coord: GLenum, pname: GLenum, params: *const GLdouble);
    fn glTexGenf(coord: GLenum, pname: GLenum, param: GLfloat);
    fn glTexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat);
    fn glTexGeni(coord: GLenum, pname: GLenum, param: GLint);
    fn glTexGeniv(coord: GLenum, pname: GLenum, params: *const GLint);
    fn glTexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
    fn glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
    fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
    fn glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
    fn glTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn glTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void);
    fn glTranslated(x: GLdouble, y: GLdouble, z: GLdouble);
    fn glTranslatef(x: GLfloat, y: GLfloat, z: GLfloat);
    fn glVertex2d(x: GLdouble, y: GLdouble);
    fn glVertex2dv(v: *const GLdouble);
    fn glVertex2f(x: GLfloat, y: GLfloat);
    fn glVertex2fv(v: *const GLfloat);
    fn glVertex2i(x: GLint, y: GLint);
    fn glVertex2iv(v: *const GLint);
    fn glVertex2s(x: GLshort, y: GLshort);
    fn glVertex2sv(v: *const GLshort);
    fn glVertex3d(x: GLdouble, y: GLdouble, z: GLdouble);
    fn glVertex3dv(v: *const GLdouble);
    fn glVertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
    fn glVertex3fv(v: *const GLfloat);
    fn glVertex3i(x: GLint, y: GLint, z: GLint);
    fn glVertex3iv(v: *const GLint);
    fn glVertex3s(x: GLshort, y: GLshort, z: GLshort);
    fn glVertex3sv(v: *const GLshort);
    fn glVertex4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
    fn glVertex4dv(v: *const GLdouble);
    fn glVertex4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
    fn glVertex4fv(v: *const GLfloat);
    fn glVertex4i(x: GLint, y: GLint, z: GLint, w: GLint);
    fn glVertex4iv(v: *const GLint);
    fn glVertex4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
    fn glVertex4sv(v: *const GLshort);
    fn glVertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void);
    fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
}
