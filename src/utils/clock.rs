//! Wall-clock stopwatch for timed benchmark passes.
//!
//! Readings come from the realtime clock (`CLOCK_REALTIME` on unix) and are
//! kept as a seconds / sub-second nanoseconds pair. Elapsed values are the
//! field-wise difference of the two readings: the nanosecond part is NOT
//! normalized against the seconds part and goes negative whenever the stop
//! reading's sub-second field is smaller than the start's.

/// One realtime clock reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: i64,
}

/// Read the realtime clock.
#[inline(always)]
pub fn read_realtime() -> Timestamp {
    #[cfg(unix)]
    {
        read_realtime_unix()
    }

    #[cfg(not(unix))]
    {
        read_realtime_system()
    }
}

#[cfg(unix)]
#[inline(always)]
fn read_realtime_unix() -> Timestamp {
    // A failed read leaves the zeroed timespec in place
    let ts = unsafe {
        let mut ts: libc::timespec = std::mem::zeroed();
        libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts);
        ts
    };
    Timestamp {
        seconds: ts.tv_sec as i64,
        nanoseconds: ts.tv_nsec as i64,
    }
}

#[cfg(not(unix))]
#[inline(always)]
fn read_realtime_system() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| Timestamp {
            seconds: d.as_secs() as i64,
            nanoseconds: d.subsec_nanos() as i64,
        })
        .unwrap_or_default()
}

/// Start/stop stopwatch over the realtime clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    begin: Timestamp,
    end: Timestamp,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn start(&mut self) {
        self.begin = read_realtime();
    }

    #[inline(always)]
    pub fn stop(&mut self) {
        self.end = read_realtime();
    }

    /// Whole-second difference between the two readings.
    pub fn elapsed_seconds(&self) -> i64 {
        self.end.seconds - self.begin.seconds
    }

    /// Sub-second difference between the two readings, possibly negative.
    pub fn elapsed_nanoseconds(&self) -> i64 {
        self.end.nanoseconds - self.begin.nanoseconds
    }

    #[cfg(test)]
    fn from_readings(begin: Timestamp, end: Timestamp) -> Self {
        Self { begin, end }
    }
}
