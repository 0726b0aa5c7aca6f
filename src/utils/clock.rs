//! Reloj de la aplicación
//!
//! Los cálculos de asignaciones en curso dependen de "ahora"; se inyecta un
//! `Clock` para que los tests puedan fijar el instante.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

pub trait Clock: Send + Sync {
    /// Instante actual en hora local (sin zona)
    fn now(&self) -> NaiveDateTime;

    /// Instante actual en UTC, para timestamps persistidos
    fn now_utc(&self) -> DateTime<Utc>;

    /// Desfase de la hora local respecto a UTC; `now()` y `now_utc()` difieren en él
    fn local_offset(&self) -> FixedOffset;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reloj del sistema
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn local_offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}

/// Reloj fijo (tests y recálculos reproducibles)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.0)
    }

    fn local_offset(&self) -> FixedOffset {
        Utc.fix()
    }
}
