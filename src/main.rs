fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(cv_site::app::App);
    }
    #[cfg(not(feature = "csr"))]
    {
        eprintln!("cv-site runs in the browser; build it with `trunk serve --features csr`");
    }
}
