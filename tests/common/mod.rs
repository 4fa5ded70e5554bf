use std::collections::VecDeque;

use bufr_synop::{BufrError, BufrMessage, BufrSource, BufrValue, MessageRead};

/// In-memory message standing in for a decoded codec handle.
#[derive(Debug, Default, Clone)]
pub struct MockMessage {
    entries: Vec<(String, Vec<BufrValue>)>,
    codes: Vec<(String, i64)>,
    fail_unpack: bool,
}

impl MockMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a key with a scalar value, in message order.
    pub fn scalar(mut self, key: &str, value: BufrValue) -> Self {
        self.entries.push((key.to_owned(), vec![value]));
        self
    }

    /// Declares a key with an array value, in message order.
    pub fn array(mut self, key: &str, values: Vec<BufrValue>) -> Self {
        self.entries.push((key.to_owned(), values));
        self
    }

    pub fn descriptor(mut self, key: &str, code: i64) -> Self {
        self.codes.push((key.to_owned(), code));
        self
    }

    pub fn failing_unpack(mut self) -> Self {
        self.fail_unpack = true;
        self
    }

    fn find(&self, key: &str) -> Option<&Vec<BufrValue>> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, values)| values)
    }
}

impl BufrMessage for MockMessage {
    type KeyIter<'a>
        = std::vec::IntoIter<String>
    where
        Self: 'a;

    fn set_unpack(&mut self) -> Result<(), BufrError> {
        if self.fail_unpack {
            Err(BufrError::MessageDecode("unable to unpack".to_owned()))
        } else {
            Ok(())
        }
    }

    fn keys(&self) -> Self::KeyIter<'_> {
        self.entries
            .iter()
            .map(|(name, _)| name.clone())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn scalar(&self, key: &str) -> Option<BufrValue> {
        self.find(key).and_then(|values| values.first().cloned())
    }

    fn array(&self, key: &str) -> Option<Vec<BufrValue>> {
        self.find(key).cloned()
    }

    fn descriptor_code(&self, key: &str) -> Option<i64> {
        self.codes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, code)| *code)
    }
}

/// Source yielding a scripted sequence of pulls, then `End` forever.
pub struct MockSource {
    reads: VecDeque<MessageRead<MockMessage>>,
}

impl MockSource {
    pub fn new(reads: Vec<MessageRead<MockMessage>>) -> Self {
        Self {
            reads: reads.into(),
        }
    }
}

impl BufrSource for MockSource {
    type Message = MockMessage;

    fn next_message(&mut self) -> MessageRead<MockMessage> {
        self.reads.pop_front().unwrap_or(MessageRead::End)
    }
}
