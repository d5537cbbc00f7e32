/// Error for sensor operations.
///
/// `E` is the bus error of the underlying `embedded_hal::i2c::I2c`
/// implementation. Only raw acceleration reads escalate a bus error into
/// the permanent fault latch; every other operation surfaces `I2c` per
/// call and may be retried freely.
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Bus transaction failed.
    I2c(E),
    /// Chip identification register did not match the selected variant.
    UnknownChip(u8),
    /// The feature engine rejected the uploaded configuration blob.
    ConfigLoad,
    /// `init` was called on an already-initialized session.
    AlreadyInitialized,
    /// Hardware revision 0 is the "unset" sentinel and is rejected at init.
    InvalidConfig,
    /// The fault latch is set; acceleration reads are permanently disabled
    /// for this session. There is no API to clear it short of recreating
    /// the process.
    Faulted,
}
