// Reentrancy lock held in the slot for the length of one mutating call

use soroban_sdk::Env;

use crate::error::PoolError;
use crate::storage::{read_slot, write_slot};

/// Holds `PoolSlot.locked`; released when dropped, on every exit path
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PoolError> {
        let mut slot = read_slot(env)?;
        if slot.locked {
            return Err(PoolError::Locked);
        }
        slot.locked = true;
        write_slot(env, &slot);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        // re-read: the guarded call has usually moved price and tick
        if let Ok(mut slot) = read_slot(self.env) {
            slot.locked = false;
            write_slot(self.env, &slot);
        }
    }
}
