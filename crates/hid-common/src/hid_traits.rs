//! Host-side seams: device enumeration and report delivery

use crate::{DeviceIdentity, HidCommonResult, RawReport};
use async_trait::async_trait;

/// Source of raw input reports for one opened device.
pub trait ReportSource: Send {
    fn identity(&self) -> &DeviceIdentity;

    /// Next input report; fails when the device is gone or sends a buffer of
    /// the wrong size.
    fn read_report(&mut self) -> HidCommonResult<RawReport>;

    fn is_connected(&self) -> bool;
}

/// Enumerates the devices currently attached to the host.
#[async_trait]
pub trait DeviceEnumerator: Send + Sync {
    async fn list_devices(&self) -> HidCommonResult<Vec<DeviceIdentity>>;

    async fn open_source(&self, path: &str) -> HidCommonResult<Box<dyn ReportSource>>;
}

pub mod mock {
    use super::*;
    use crate::HidCommonError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use tracing::{debug, warn};

    /// In-memory device that replays queued buffers as reports.
    pub struct MockReportSource {
        identity: DeviceIdentity,
        read_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
    }

    impl MockReportSource {
        pub fn new(identity: DeviceIdentity) -> Self {
            Self {
                identity,
                read_queue: Arc::new(Mutex::new(VecDeque::new())),
                connected: Arc::new(Mutex::new(true)),
            }
        }

        /// Queue a raw buffer; its length is checked only when it is read.
        pub fn queue_read(&self, data: impl Into<Vec<u8>>) {
            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(data.into());
        }

        pub fn queued(&self) -> usize {
            self.read_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .len()
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }

        fn share(&self) -> Self {
            Self {
                identity: self.identity.clone(),
                read_queue: Arc::clone(&self.read_queue),
                connected: Arc::clone(&self.connected),
            }
        }
    }

    impl ReportSource for MockReportSource {
        fn identity(&self) -> &DeviceIdentity {
            &self.identity
        }

        fn read_report(&mut self) -> HidCommonResult<RawReport> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }

            let next = self
                .read_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .pop_front()
                .ok_or_else(|| HidCommonError::ReadError("No data available".to_string()))?;
            RawReport::try_from(next.as_slice())
        }

        fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }
    }

    /// Enumerator over a fixed set of mock devices, keyed by path.
    pub struct MockEnumerator {
        devices: Vec<MockReportSource>,
    }

    impl MockEnumerator {
        pub fn new() -> Self {
            Self {
                devices: Vec::new(),
            }
        }

        /// Add a device; its identity should carry a path so it can be opened.
        pub fn add_device(&mut self, device: MockReportSource) {
            self.devices.push(device);
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }
    }

    impl Default for MockEnumerator {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl DeviceEnumerator for MockEnumerator {
        async fn list_devices(&self) -> HidCommonResult<Vec<DeviceIdentity>> {
            Ok(self.devices.iter().map(|d| d.identity.clone()).collect())
        }

        async fn open_source(&self, path: &str) -> HidCommonResult<Box<dyn ReportSource>> {
            let Some(device) = self
                .devices
                .iter()
                .find(|d| d.identity.path.as_deref() == Some(path))
            else {
                warn!(path, "no mock device at path");
                return Err(HidCommonError::DeviceNotFound(path.to_string()));
            };

            debug!(path, device = %device.identity.display_name(), "opened mock device");
            Ok(Box::new(device.share()))
        }
    }
}
