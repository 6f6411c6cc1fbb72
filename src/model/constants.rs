//! Numeric contract of the native message box and default texts.
//!
//! The values here are fixed by `MessageBoxEx` in `user32` and form an
//! external wire format. They must not be renumbered.

// === Button Sets (MB_TYPEMASK) ===

/// OK button only.
pub const MB_OK: u32 = 0x0;

/// OK and Cancel.
pub const MB_OKCANCEL: u32 = 0x1;

/// Abort, Retry and Ignore.
pub const MB_ABORTRETRYIGNORE: u32 = 0x2;

/// Yes, No and Cancel.
pub const MB_YESNOCANCEL: u32 = 0x3;

/// Yes and No.
pub const MB_YESNO: u32 = 0x4;

/// Retry and Cancel.
pub const MB_RETRYCANCEL: u32 = 0x5;

/// Cancel, Try Again and Continue.
pub const MB_CANCELTRYCONTINUE: u32 = 0x6;

/// Bits holding the button set.
pub const MB_TYPEMASK: u32 = 0x0F;

// === Icons (MB_ICONMASK) ===

/// Stop sign. Also known as MB_ICONSTOP and MB_ICONHAND.
pub const MB_ICONERROR: u32 = 0x10;

/// Question mark in a circle.
pub const MB_ICONQUESTION: u32 = 0x20;

/// Exclamation point. Also known as MB_ICONEXCLAMATION.
pub const MB_ICONWARNING: u32 = 0x30;

/// Lowercase 'i' in a circle. Also known as MB_ICONASTERISK.
pub const MB_ICONINFORMATION: u32 = 0x40;

/// Bits holding the icon.
pub const MB_ICONMASK: u32 = 0xF0;

// === Default Button (MB_DEFMASK) ===

pub const MB_DEFBUTTON1: u32 = 0x000;
pub const MB_DEFBUTTON2: u32 = 0x100;
pub const MB_DEFBUTTON3: u32 = 0x200;
pub const MB_DEFBUTTON4: u32 = 0x300;

/// Bits holding the default button index.
pub const MB_DEFMASK: u32 = 0xF00;

// === Modality (MB_MODEMASK) ===

/// Blocks the owner window only.
pub const MB_APPLMODAL: u32 = 0x0000;

/// Like MB_APPLMODAL, but the box is topmost.
pub const MB_SYSTEMMODAL: u32 = 0x1000;

/// Blocks every top-level window of the calling thread. Used when there is
/// no owner to target.
pub const MB_TASKMODAL: u32 = 0x2000;

/// Bits holding the modality.
pub const MB_MODEMASK: u32 = 0x3000;

// === Return Codes ===

/// Returned when the box could not be created.
pub const ID_NONE: i32 = 0;
pub const IDOK: i32 = 1;
pub const IDCANCEL: i32 = 2;
pub const IDABORT: i32 = 3;
pub const IDRETRY: i32 = 4;
pub const IDIGNORE: i32 = 5;
pub const IDYES: i32 = 6;
pub const IDNO: i32 = 7;
pub const IDTRYAGAIN: i32 = 10;
pub const IDCONTINUE: i32 = 11;

// === Default Titles ===

pub const DEFAULT_TITLE_ERROR: &str = "Error";
pub const DEFAULT_TITLE_WARNING: &str = "Warning";
pub const DEFAULT_TITLE_INFO: &str = "Information";
pub const DEFAULT_TITLE_QUESTION: &str = "Question";
pub const DEFAULT_TITLE_RETRY: &str = "Retry?";
