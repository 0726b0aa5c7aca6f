//! Debounce de la entrada de búsqueda
//!
//! Cada pulsación reinicia el plazo; solo el último valor se aplica cuando
//! el plazo vence sin nuevas pulsaciones.

use std::time::Duration;
use tokio::time::Instant;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Registrar un valor nuevo y reiniciar el plazo
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Valor pendiente si su plazo ya venció
    pub fn take_ready(&mut self) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if *deadline <= Instant::now() => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Esperar a que venza el plazo del valor pendiente
    pub async fn settle(&mut self) -> Option<T> {
        let (value, deadline) = self.pending.take()?;
        tokio::time::sleep_until(deadline).await;
        Some(value)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_fires_after_quiet_period() {
        let mut debouncer = Debouncer::default();
        debouncer.push("a".to_string());
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.push("ab".to_string());

        tokio::time::advance(Duration::from_millis(299)).await;
        assert_eq!(debouncer.take_ready(), None);
        assert!(debouncer.is_pending());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(debouncer.take_ready().as_deref(), Some("ab"));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_deadline() {
        let mut debouncer = Debouncer::new(SEARCH_DEBOUNCE);
        let start = Instant::now();
        debouncer.push(1);
        assert_eq!(debouncer.settle().await, Some(1));
        assert!(start.elapsed() >= SEARCH_DEBOUNCE);
        assert_eq!(debouncer.settle().await, None);
    }
}
