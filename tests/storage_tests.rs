//! Tests for the Windows title-override storage, reached through the same
//! public paths the demo binary uses.
#![cfg(target_os = "windows")]

use win32_msgbox::platform::windows::ffi::{hwnd_from, owner_handle};
use win32_msgbox::platform::windows::storage::{self, config, load_titles};
use win32_msgbox::{OwnerHandle, Titles};

#[test]
fn storage_reexport_and_module_path_agree() {
    assert_eq!(storage::config_path(), config::config_path());
}

#[test]
fn load_titles_without_file_is_default() {
    if !config::config_path().exists() {
        assert_eq!(load_titles(), Titles::default());
    }
}

#[test]
fn owner_handle_round_trips_through_hwnd() {
    let handle = OwnerHandle::new(0x0001_0010).expect("non-null");
    assert_eq!(owner_handle(hwnd_from(handle)), Some(handle));
}
