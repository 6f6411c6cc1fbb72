//! Windows demo window.
//!
//! One push button per convenience dialog, plus one that shows an unowned
//! box. Owned dialogs are parented to the demo window; every decision dialog
//! is followed by an info box naming the button the user picked.

use std::cell::RefCell;

use log::{error, info};
use raw_window_handle::{
    HandleError, HasWindowHandle, RawWindowHandle, Win32WindowHandle, WindowHandle,
};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, LoadCursorW, PostQuitMessage,
    RegisterClassW, ShowWindow, TranslateMessage, CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU,
    IDC_ARROW, MSG, SW_SHOW, WINDOW_EX_STYLE, WM_COMMAND, WM_CREATE, WM_DESTROY, WNDCLASSW,
    WS_CAPTION, WS_CHILD, WS_MINIMIZEBOX, WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use win32_msgbox::platform::windows::ffi::{owner_handle, to_wide};
use win32_msgbox::platform::windows::storage::load_titles;
use win32_msgbox::{DialogKind, Dialogs, NativePresenter, Owner};

// Control IDs. Dialog buttons use ID_FIRST_DIALOG + index into DialogKind::ALL.
const ID_FIRST_DIALOG: i32 = 200;
const ID_UNOWNED: i32 = 300;

// Button notification (from winuser.h)
const BN_CLICKED: u32 = 0;

// Layout constants
const MARGIN: i32 = 20;
const GAP: i32 = 10;
const BUTTON_WIDTH: i32 = 170;
const BUTTON_HEIGHT: i32 = 28;
const ROWS: i32 = 5;

// Window dimensions (client area plus frame and caption)
const WINDOW_WIDTH: i32 = 2 * MARGIN + 2 * BUTTON_WIDTH + GAP + 16;
const WINDOW_HEIGHT: i32 = 2 * MARGIN + ROWS * (BUTTON_HEIGHT + GAP) + 39;

thread_local! {
    static DIALOGS: RefCell<Option<Dialogs<NativePresenter>>> = const { RefCell::new(None) };
}

/// The demo window as seen by `raw-window-handle` consumers.
struct DemoWindow(HWND);

impl HasWindowHandle for DemoWindow {
    fn window_handle(&self) -> Result<WindowHandle<'_>, HandleError> {
        let hwnd = owner_handle(self.0).ok_or(HandleError::Unavailable)?;
        let raw = RawWindowHandle::Win32(Win32WindowHandle::new(hwnd.into()));
        // The HWND stays valid for as long as the demo window exists.
        Ok(unsafe { WindowHandle::borrow_raw(raw) })
    }
}

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!("demo error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    let titles = load_titles();
    DIALOGS.with(|d| *d.borrow_mut() = Some(Dialogs::with_titles(NativePresenter, titles)));

    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("Win32MsgBoxDemo");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("Win32 MsgBox Demo"),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        let _ = ShowWindow(hwnd, SW_SHOW);
        info!("demo window ready");

        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    Ok(())
}

unsafe extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_buttons(hwnd);
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            if notification == BN_CLICKED {
                handle_command(hwnd, control_id);
            }
            LRESULT(0)
        }

        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_buttons(hwnd: HWND) {
    let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();

    for (index, kind) in DialogKind::ALL.iter().enumerate() {
        let index = index as i32;
        let x = MARGIN + (index % 2) * (BUTTON_WIDTH + GAP);
        let y = MARGIN + (index / 2) * (BUTTON_HEIGHT + GAP);
        create_button(hwnd, hinstance, x, y, kind.label(), ID_FIRST_DIALOG + index);
    }

    let y = MARGIN + (ROWS - 1) * (BUTTON_HEIGHT + GAP);
    create_button(hwnd, hinstance, MARGIN, y, "Info (no owner)", ID_UNOWNED);
}

unsafe fn create_button(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str, id: i32) {
    let text_wide = to_wide(text);
    let created = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    );
    if let Err(e) = created {
        error!("failed to create button {:?}: {}", text, e);
    }
}

fn handle_command(hwnd: HWND, control_id: i32) {
    if control_id == ID_UNOWNED {
        with_dialogs(|dialogs| {
            dialogs.show_info(Owner::Unowned, "This box has no owner window.", None);
        });
        return;
    }

    let kind = usize::try_from(control_id - ID_FIRST_DIALOG)
        .ok()
        .and_then(|index| DialogKind::ALL.get(index).copied());
    if let Some(kind) = kind {
        show_demo(hwnd, kind);
    }
}

fn show_demo(hwnd: HWND, kind: DialogKind) {
    let owner = Owner::from_window(&DemoWindow(hwnd));
    with_dialogs(|dialogs| {
        info!("showing {} dialog", kind.label());
        let outcome = dialogs.show(kind, owner, demo_message(kind), None);
        if kind.returns_outcome() {
            dialogs.show_info(owner, &format!("User selected {}", outcome), None);
        }
    });
}

fn with_dialogs<F: FnOnce(&Dialogs<NativePresenter>)>(f: F) {
    DIALOGS.with(|d| {
        if let Some(ref dialogs) = *d.borrow() {
            f(dialogs);
        }
    });
}

fn demo_message(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Error => "An error has occurred.",
        DialogKind::Warning => "Something bad might happen soon.",
        DialogKind::Info => "The operation has completed.",
        DialogKind::YesNo | DialogKind::YesNoCancel => "Exit program?",
        DialogKind::RetryCancel => "Try again?",
        DialogKind::CancelRetryContinue => "Try again or keep going?",
        DialogKind::AbortRetryIgnore => "Not ready reading drive A",
    }
}
