//! Codec backend on top of the `eccodes` crate (ECMWF ecCodes
//! bindings). Compiled only with the `eccodes` cargo feature, since it
//! links the ecCodes C library.

use std::path::Path;

use eccodes::codes_handle::{CodesHandle, Key, KeyType, KeyedMessage, ProductKind};

use super::{BufrMessage, BufrSource, BufrValue, MessageRead};
use crate::error::BufrError;

/// Message source reading BUFR messages from a file through ecCodes.
pub struct EccodesSource {
    handle: CodesHandle,
}

impl EccodesSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BufrError> {
        let handle = CodesHandle::new_from_file(path.as_ref().to_path_buf(), ProductKind::BUFR)
            .map_err(|e| BufrError::OperationError(e.to_string()))?;
        Ok(Self { handle })
    }
}

impl BufrSource for EccodesSource {
    type Message = EccodesMessage;

    fn next_message(&mut self) -> MessageRead<EccodesMessage> {
        match self.handle.next() {
            None => MessageRead::End,
            Some(Ok(inner)) => MessageRead::Message(EccodesMessage { inner }),
            Some(Err(e)) => MessageRead::DecodeError(BufrError::MessageDecode(e.to_string())),
        }
    }
}

/// One decoded message handle. Dropping it releases the underlying
/// ecCodes handle.
pub struct EccodesMessage {
    inner: KeyedMessage,
}

impl EccodesMessage {
    fn read(&self, key: &str) -> Option<KeyType> {
        self.inner.read_key(key).ok().map(|k| k.value)
    }
}

impl BufrMessage for EccodesMessage {
    type KeyIter<'a>
        = std::vec::IntoIter<String>
    where
        Self: 'a;

    fn set_unpack(&mut self) -> Result<(), BufrError> {
        self.inner
            .write_key(Key {
                name: "unpack".to_owned(),
                value: KeyType::Int(1),
            })
            .map_err(|e| BufrError::MessageDecode(e.to_string()))
    }

    fn keys(&self) -> Self::KeyIter<'_> {
        let names: Vec<String> = match self.inner.default_keys_iterator() {
            Ok(iterator) => iterator.map(|key| key.name).collect(),
            Err(_) => Vec::new(),
        };
        names.into_iter()
    }

    fn scalar(&self, key: &str) -> Option<BufrValue> {
        match self.read(key)? {
            KeyType::Int(v) => Some(BufrValue::Long(v)),
            KeyType::Float(v) => Some(BufrValue::Double(v)),
            KeyType::Str(s) => Some(BufrValue::Text(s)),
            KeyType::IntArray(v) => v.first().map(|v| BufrValue::Long(*v)),
            KeyType::FloatArray(v) => v.first().map(|v| BufrValue::Double(*v)),
            KeyType::Bytes(_) => None,
        }
    }

    fn array(&self, key: &str) -> Option<Vec<BufrValue>> {
        match self.read(key)? {
            KeyType::Int(v) => Some(vec![BufrValue::Long(v)]),
            KeyType::Float(v) => Some(vec![BufrValue::Double(v)]),
            KeyType::Str(s) => Some(vec![BufrValue::Text(s)]),
            KeyType::IntArray(v) => Some(v.into_iter().map(BufrValue::Long).collect()),
            KeyType::FloatArray(v) => Some(v.into_iter().map(BufrValue::Double).collect()),
            KeyType::Bytes(_) => None,
        }
    }

    fn descriptor_code(&self, key: &str) -> Option<i64> {
        match self.read(&format!("{key}->code"))? {
            KeyType::Int(v) => Some(v),
            KeyType::Str(s) => s.trim().parse().ok(),
            KeyType::IntArray(v) => v.first().copied(),
            _ => None,
        }
    }
}
