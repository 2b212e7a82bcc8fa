#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use paxfan::{BleTransport, CharacteristicId, DeviceAddress};

pub const ADDRESS: &str = "58:2B:DB:01:02:03";

#[derive(Debug, Default)]
pub struct FakeState {
    /// Whether `resolve` finds the device
    pub reachable: bool,
    /// Outcome of successive connect calls, `true` once exhausted
    pub connect_results: VecDeque<bool>,
    pub resolve_calls: usize,
    pub connect_calls: usize,
    pub disconnect_calls: usize,
    pub disconnect_fails: bool,
    /// Whether the link of the last connected handle is still up
    pub live: bool,
    /// Fail every read and write
    pub io_fails: bool,
    pub values: HashMap<CharacteristicId, Vec<u8>>,
    pub reads: Vec<CharacteristicId>,
    pub writes: Vec<(CharacteristicId, Vec<u8>, bool)>,
}

/// Scripted in-memory BLE transport. Clones share state so tests can inspect it.
#[derive(Debug, Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    pub fn reachable() -> Self {
        let transport = Self::default();
        transport.state().reachable = true;
        transport
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn set_value(&self, id: CharacteristicId, value: &[u8]) {
        self.state().values.insert(id, value.to_vec());
    }
}

#[async_trait]
impl BleTransport for FakeTransport {
    type Device = String;

    async fn resolve(&self, address: &DeviceAddress) -> anyhow::Result<Option<String>> {
        let mut state = self.state();
        state.resolve_calls += 1;
        Ok(state.reachable.then(|| address.to_string()))
    }

    async fn connect(&self, _device: &String) -> anyhow::Result<()> {
        let mut state = self.state();
        state.connect_calls += 1;
        if state.connect_results.pop_front().unwrap_or(true) {
            state.live = true;
            Ok(())
        } else {
            Err(anyhow!("connection attempt {} failed", state.connect_calls))
        }
    }

    async fn disconnect(&self, _device: &String) -> anyhow::Result<()> {
        let mut state = self.state();
        state.disconnect_calls += 1;
        state.live = false;
        if state.disconnect_fails {
            Err(anyhow!("disconnect failed"))
        } else {
            Ok(())
        }
    }

    async fn is_connected(&self, _device: &String) -> bool {
        self.state().live
    }

    async fn read(&self, _device: &String, id: CharacteristicId) -> anyhow::Result<Vec<u8>> {
        let mut state = self.state();
        state.reads.push(id);
        if state.io_fails {
            return Err(anyhow!("read failed"));
        }
        state
            .values
            .get(&id)
            .cloned()
            .ok_or_else(|| anyhow!("no value for {id}"))
    }

    async fn write(
        &self,
        _device: &String,
        id: CharacteristicId,
        value: &[u8],
        with_response: bool,
    ) -> anyhow::Result<()> {
        let mut state = self.state();
        if state.io_fails {
            return Err(anyhow!("write failed"));
        }
        state.writes.push((id, value.to_vec(), with_response));
        state.values.insert(id, value.to_vec());
        Ok(())
    }
}
