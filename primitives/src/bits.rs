use derive_more::{AsRef, Deref};
use fixed_hash::{construct_fixed_hash, impl_fixed_hash_conversions};

use crate::U256;

construct_fixed_hash! {
    /// 256 bits fixed hash
    #[derive(AsRef, Deref)]
    pub struct B256(32);
}

construct_fixed_hash! {
    /// 160 bits fixed hash
    #[derive(AsRef, Deref)]
    pub struct B160(20);
}

impl_fixed_hash_conversions!(B256, B160);

impl From<U256> for B256 {
    fn from(value: U256) -> Self {
        B256(value.to_be_bytes::<32>())
    }
}

impl From<B256> for U256 {
    fn from(value: B256) -> Self {
        U256::from_be_bytes::<32>(value.0)
    }
}
