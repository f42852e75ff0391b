#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = mandir_ui::run() {
        eprintln!("Mandir failed: {err}");
        std::process::exit(1);
    }
}
