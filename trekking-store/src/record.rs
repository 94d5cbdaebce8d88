// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage representation of a group.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use trekking_core::{Group, GroupError};

/// Group as it is encoded into the database.
///
/// Fields other than the name fall back to their default value when missing, records written
/// before a field was introduced stay readable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,

    #[serde(default)]
    pub participants: Vec<String>,

    /// Recipients parallel to `participants`, only meaningful when `drawn` is set.
    #[serde(default)]
    pub assignment: Vec<String>,

    #[serde(default)]
    pub drawn: bool,
}

impl GroupRecord {
    /// Encodes the record in [CBOR] format.
    ///
    /// [CBOR]: https://cbor.io/
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        let mut bytes = Vec::new();
        ciborium::into_writer(self, &mut bytes)?;
        Ok(bytes)
    }

    /// Decodes a CBOR-encoded record.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        Ok(ciborium::from_reader(bytes)?)
    }
}

impl From<&Group> for GroupRecord {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().to_string(),
            participants: group.participants().to_vec(),
            assignment: group.assignment().map(<[String]>::to_vec).unwrap_or_default(),
            drawn: group.is_drawn(),
        }
    }
}

impl TryFrom<GroupRecord> for Group {
    type Error = GroupError;

    fn try_from(record: GroupRecord) -> Result<Self, Self::Error> {
        let assignment = record.drawn.then_some(record.assignment);
        Group::from_parts(record.name, record.participants, assignment)
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("could not encode record: {0}")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("could not decode record: {0}")]
    Decode(#[from] ciborium::de::Error<std::io::Error>),
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use serde::Serialize;
    use trekking_core::{Group, GroupError};

    use super::GroupRecord;

    #[test]
    fn keeps_all_fields() {
        let mut group = Group::new("family");
        for name in ["anna", "bram", "cees"] {
            group.add_participant(name).unwrap();
        }
        group.draw(&mut ChaCha20Rng::seed_from_u64(1)).unwrap();

        let bytes = GroupRecord::from(&group).to_bytes().unwrap();
        let record = GroupRecord::from_bytes(&bytes).unwrap();
        assert!(record.drawn);
        assert_eq!(Group::try_from(record).unwrap(), group);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        // A record written before assignments and the drawn flag were stored.
        #[derive(Serialize)]
        struct OldRecord {
            name: String,
            participants: Vec<String>,
        }

        let mut bytes = Vec::new();
        ciborium::into_writer(
            &OldRecord {
                name: "office".into(),
                participants: vec!["anna".into()],
            },
            &mut bytes,
        )
        .unwrap();

        let record = GroupRecord::from_bytes(&bytes).unwrap();
        assert_eq!(
            record,
            GroupRecord {
                name: "office".into(),
                participants: vec!["anna".into()],
                assignment: vec![],
                drawn: false,
            }
        );

        let group = Group::try_from(record).unwrap();
        assert!(!group.is_drawn());
        assert_eq!(group.participants(), ["anna"]);
    }

    #[test]
    fn reject_broken_assignment() {
        let record = GroupRecord {
            name: "office".into(),
            participants: vec!["anna".into(), "bram".into()],
            assignment: vec!["anna".into(), "bram".into()],
            drawn: true,
        };

        assert_eq!(
            Group::try_from(record),
            Err(GroupError::InconsistentAssignment)
        );

        // "bram" is drawn twice, "cees" by nobody.
        let record = GroupRecord {
            name: "office".into(),
            participants: vec!["anna".into(), "bram".into(), "cees".into()],
            assignment: vec!["bram".into(), "anna".into(), "bram".into()],
            drawn: true,
        };

        assert_eq!(
            Group::try_from(record),
            Err(GroupError::InconsistentAssignment)
        );
    }

    #[test]
    fn reject_garbage_bytes() {
        assert!(GroupRecord::from_bytes(&[0xff, 0x00, 0x13]).is_err());
    }
}
