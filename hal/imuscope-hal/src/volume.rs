//! Storage volume
//!
//! The volume is the flash partition the firmware mounts at boot. Mounting
//! verifies the header record and formats a blank partition on first use.
//! Nothing else is stored; sensor samples are never persisted.

use serde::{Deserialize, Serialize};

use crate::flash::{FlashError, FlashStorage, StorageKey};

/// Magic number identifying an imuscope volume ("IMUV")
pub const VOLUME_MAGIC: u32 = 0x494D_5556;

/// Current on-flash layout version
pub const VOLUME_VERSION: u8 = 1;

/// Maximum encoded header size
const HEADER_BUF_LEN: usize = 16;

/// Header record stored under [`StorageKey::VolumeHeader`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VolumeHeader {
    pub magic: u32,
    pub version: u8,
}

impl VolumeHeader {
    /// Header for a freshly formatted volume
    pub const fn current() -> Self {
        Self {
            magic: VOLUME_MAGIC,
            version: VOLUME_VERSION,
        }
    }
}

/// Reasons a volume fails to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VolumeError {
    /// Underlying flash storage failed
    Flash(FlashError),
    /// Header record could not be decoded
    Corrupted,
    /// Header belongs to a different application
    WrongMagic,
    /// Header was written by a newer layout version
    UnsupportedVersion(u8),
}

impl From<FlashError> for VolumeError {
    fn from(e: FlashError) -> Self {
        VolumeError::Flash(e)
    }
}

/// A storage volume that must be mounted before the application starts
pub trait StorageVolume {
    /// Mount the volume, formatting it if it has never been used
    fn mount(&mut self) -> impl core::future::Future<Output = Result<VolumeHeader, VolumeError>>;
}

/// Volume backed by a [`FlashStorage`] key-value store
pub struct Volume<F> {
    storage: F,
    mounted: bool,
}

impl<F: FlashStorage> Volume<F> {
    pub fn new(storage: F) -> Self {
        Self {
            storage,
            mounted: false,
        }
    }

    /// Whether the last mount attempt succeeded
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    async fn format(&mut self) -> Result<VolumeHeader, VolumeError> {
        let header = VolumeHeader::current();
        let mut buf = [0u8; HEADER_BUF_LEN];
        let encoded = postcard::to_slice(&header, &mut buf).map_err(|_| VolumeError::Corrupted)?;
        self.storage.write(StorageKey::VolumeHeader, encoded).await?;
        Ok(header)
    }

    async fn try_mount(&mut self) -> Result<VolumeHeader, VolumeError> {
        let mut buf = [0u8; HEADER_BUF_LEN];
        let len = match self.storage.read(StorageKey::VolumeHeader, &mut buf).await {
            Ok(len) => len,
            Err(FlashError::NotFound) => return self.format().await,
            Err(e) => return Err(e.into()),
        };

        let header: VolumeHeader =
            postcard::from_bytes(&buf[..len]).map_err(|_| VolumeError::Corrupted)?;

        if header.magic != VOLUME_MAGIC {
            return Err(VolumeError::WrongMagic);
        }
        if header.version > VOLUME_VERSION {
            return Err(VolumeError::UnsupportedVersion(header.version));
        }

        Ok(header)
    }
}

impl<F: FlashStorage> StorageVolume for Volume<F> {
    async fn mount(&mut self) -> Result<VolumeHeader, VolumeError> {
        let result = self.try_mount().await;
        self.mounted = result.is_ok();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    /// Single-record in-memory store
    struct MemStorage {
        record: Option<([u8; HEADER_BUF_LEN], usize)>,
        fail: Option<FlashError>,
        writes: usize,
    }

    impl MemStorage {
        fn blank() -> Self {
            Self {
                record: None,
                fail: None,
                writes: 0,
            }
        }

        fn with_bytes(bytes: &[u8]) -> Self {
            let mut data = [0u8; HEADER_BUF_LEN];
            data[..bytes.len()].copy_from_slice(bytes);
            Self {
                record: Some((data, bytes.len())),
                fail: None,
                writes: 0,
            }
        }
    }

    impl FlashStorage for MemStorage {
        async fn read(&mut self, _key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
            if let Some(e) = self.fail {
                return Err(e);
            }
            match &self.record {
                Some((data, len)) => {
                    buffer[..*len].copy_from_slice(&data[..*len]);
                    Ok(*len)
                }
                None => Err(FlashError::NotFound),
            }
        }

        async fn write(&mut self, _key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
            let mut buf = [0u8; HEADER_BUF_LEN];
            buf[..data.len()].copy_from_slice(data);
            self.record = Some((buf, data.len()));
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_blank_volume_is_formatted() {
        let mut volume = Volume::new(MemStorage::blank());
        let header = block_on(volume.mount()).unwrap();
        assert_eq!(header, VolumeHeader::current());
        assert!(volume.is_mounted());
        assert_eq!(volume.storage.writes, 1);

        // Second mount reads the header back without rewriting it
        block_on(volume.mount()).unwrap();
        assert_eq!(volume.storage.writes, 1);
    }

    #[test]
    fn test_flash_failure_does_not_mount() {
        let mut storage = MemStorage::blank();
        storage.fail = Some(FlashError::Flash);
        let mut volume = Volume::new(storage);
        assert_eq!(
            block_on(volume.mount()),
            Err(VolumeError::Flash(FlashError::Flash))
        );
        assert!(!volume.is_mounted());
    }

    #[test]
    fn test_foreign_header_rejected() {
        let foreign = VolumeHeader {
            magic: 0xDEAD_BEEF,
            version: 1,
        };
        let mut buf = [0u8; HEADER_BUF_LEN];
        let bytes = postcard::to_slice(&foreign, &mut buf).unwrap();
        let mut volume = Volume::new(MemStorage::with_bytes(bytes));
        assert_eq!(block_on(volume.mount()), Err(VolumeError::WrongMagic));
    }

    #[test]
    fn test_newer_version_rejected() {
        let newer = VolumeHeader {
            magic: VOLUME_MAGIC,
            version: VOLUME_VERSION + 1,
        };
        let mut buf = [0u8; HEADER_BUF_LEN];
        let bytes = postcard::to_slice(&newer, &mut buf).unwrap();
        let mut volume = Volume::new(MemStorage::with_bytes(bytes));
        assert_eq!(
            block_on(volume.mount()),
            Err(VolumeError::UnsupportedVersion(VOLUME_VERSION + 1))
        );
    }

    #[test]
    fn test_garbage_header_is_corrupted() {
        let mut volume = Volume::new(MemStorage::with_bytes(&[0xFF]));
        assert_eq!(block_on(volume.mount()), Err(VolumeError::Corrupted));
    }
}
