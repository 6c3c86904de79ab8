use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::RingBuffer;

impl<T> Serialize for RingBuffer<T>
    where T: Serialize
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

struct RingBufferVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for RingBufferVisitor<T>
    where T: Deserialize<'de>
{
    type Value = RingBuffer<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut buf = RingBuffer::new();
        while let Some(elem) = seq.next_element()? {
            buf.push_back(elem);
        }
        Ok(buf)
    }
}

impl<'de, T> Deserialize<'de> for RingBuffer<T>
    where T: Deserialize<'de>
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RingBufferVisitor { marker: PhantomData })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_keeps_order() {
        let mut buf = RingBuffer::with_capacity(4);
        buf.push_back(2);
        buf.push_back(3);
        buf.push_front(1);
        buf.push_front(0);

        let json = serde_json::to_string(&buf).unwrap();
        assert_eq!(json, "[0,1,2,3]");

        let back: RingBuffer<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn rejects_non_sequence() {
        assert!(serde_json::from_str::<RingBuffer<i32>>("{}").is_err());
    }
}
