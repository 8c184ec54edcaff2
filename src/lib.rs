pub mod error;
pub mod events;
pub mod logging;
pub mod report;
pub mod settings;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let mut builder = tauri::Builder::default();
    builder = builder
        .plugin(tauri_plugin_notification::init())
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init());

    builder = builder.setup(|app| {
        // Assemble the system summary before the first fault needs it.
        let _ = report::sysinfo::system_summary();

        settings::load(app.handle());
        logging::info(app.handle(), "startup", "error reporting initialized");

        Ok(())
    });

    builder = builder.invoke_handler(tauri::generate_handler![
        report::commands::check_url,
        report::commands::report_frontend_error,
        report::commands::get_report_settings,
        report::commands::set_report_settings,
        report::commands::reveal_error_log,
    ]);

    builder.run(tauri::generate_context!()).expect("error while running tauri application");
}
