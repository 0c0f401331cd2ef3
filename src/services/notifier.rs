// ============================================================================
// NOTIFIER - Avisos al usuario (toast en el navegador, log en nativo)
// ============================================================================

pub trait Notifier {
    fn error(&self, message: &str);
}

/// Sin UI: los avisos van al log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("❌ {}", message);
    }
}
