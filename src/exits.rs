//! Exit handling: terminal restoration on signals and at exit.

/// Put the tty back into cooked mode with echo, without touching stdout.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Reset style and show the cursor, but only on a tty so piped output stays
/// clean. Async-signal-safe.
fn restore_screen() {
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// Registered with atexit: runs after `process::exit` as well as a normal return.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    restore_screen();
}

/// SIGINT/SIGTERM/SIGHUP: leave through `exit` so the atexit hook runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGABRT/SIGSEGV: atexit hooks never run, so restore the tty here, then
/// re-raise with the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_termios();
    restore_screen();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install signal handlers and the atexit hook. Call early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGABRT, libc::SIGSEGV] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

/// Whether stdin is an interactive terminal.
pub fn stdin_is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}
