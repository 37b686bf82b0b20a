//! Appointment Data Model
//!
//! Records as delivered by the queue board feed. Nothing here is validated:
//! missing or `null` fields become empty strings and render blank.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LoadError;

/// Customer the appointment is booked for
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default, deserialize_with = "nullable")]
    pub first_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub last_name: String,
}

impl Client {
    /// First and last name joined by a single space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An externally identified, labelled entity (activity or program)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    #[serde(default, deserialize_with = "nullable")]
    pub external_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub label: String,
}

/// The related records of an appointment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entities {
    pub client: Client,
    pub activity: Entity,
    /// The feed spells this key `progam`
    #[serde(rename = "progam")]
    pub program: Entity,
}

/// One scheduled service appointment
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "RawAppointment", rename_all = "camelCase")]
pub struct Appointment {
    pub entities: Entities,
    /// ISO-8601 start
    pub scheduled_time: String,
    /// ISO-8601 end
    pub scheduled_end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_end: Option<String>,
    /// Free text, compared case-insensitively when styling
    pub status: String,
}

impl Appointment {
    pub fn client(&self) -> &Client {
        &self.entities.client
    }

    pub fn activity(&self) -> &Entity {
        &self.entities.activity
    }

    pub fn program(&self) -> &Entity {
        &self.entities.program
    }

    /// End time, falling back to `scheduledEnd` when `scheduledEndTime` is absent
    pub fn end_time(&self) -> &str {
        if self.scheduled_end_time.is_empty() {
            self.scheduled_end.as_deref().unwrap_or_default()
        } else {
            &self.scheduled_end_time
        }
    }
}

/// Parse a feed body into appointments, keeping the order received
pub fn parse_appointments(body: &str) -> Result<Vec<Appointment>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

// ============ Wire Shape ============

/// Entities may sit under `entities` or directly on the record
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAppointment {
    #[serde(default, deserialize_with = "nullable")]
    entities: RawEntities,
    #[serde(default)]
    client: Option<Client>,
    #[serde(default)]
    activity: Option<Entity>,
    #[serde(default)]
    progam: Option<Entity>,
    #[serde(default)]
    program: Option<Entity>,
    #[serde(default, deserialize_with = "nullable")]
    scheduled_time: String,
    #[serde(default, deserialize_with = "nullable")]
    scheduled_end_time: String,
    #[serde(default)]
    scheduled_end: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawEntities {
    #[serde(default)]
    client: Option<Client>,
    #[serde(default)]
    activity: Option<Entity>,
    #[serde(default)]
    progam: Option<Entity>,
    #[serde(default)]
    program: Option<Entity>,
}

impl From<RawAppointment> for Appointment {
    fn from(raw: RawAppointment) -> Self {
        let nested = raw.entities;
        Self {
            entities: Entities {
                client: nested.client.or(raw.client).unwrap_or_default(),
                activity: nested.activity.or(raw.activity).unwrap_or_default(),
                program: nested
                    .progam
                    .or(nested.program)
                    .or(raw.progam)
                    .or(raw.program)
                    .unwrap_or_default(),
            },
            scheduled_time: raw.scheduled_time,
            scheduled_end_time: raw.scheduled_end_time,
            scheduled_end: raw.scheduled_end,
            status: raw.status,
        }
    }
}

/// Treat an explicit `null` like a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NESTED: &str = r#"[{
        "entities": {
            "client": { "firstName": "Ada", "lastName": "Lovelace" },
            "activity": { "externalId": "A1", "label": "Setup" },
            "progam": { "externalId": "P1", "label": "Geek Squad" }
        },
        "scheduledTime": "2024-03-15T14:30:00Z",
        "scheduledEndTime": "2024-03-15T15:00:00Z",
        "scheduledEnd": "2024-03-15T15:00:00Z",
        "status": "Confirmed"
    }]"#;

    #[test]
    fn test_parse_nested_feed() {
        let appointments = parse_appointments(NESTED).unwrap();
        assert_eq!(appointments.len(), 1);

        let a = &appointments[0];
        assert_eq!(a.client().full_name(), "Ada Lovelace");
        assert_eq!(a.activity().label, "Setup");
        assert_eq!(a.activity().external_id, "A1");
        assert_eq!(a.program().label, "Geek Squad");
        assert_eq!(a.scheduled_time, "2024-03-15T14:30:00Z");
        assert_eq!(a.end_time(), "2024-03-15T15:00:00Z");
        assert_eq!(a.status, "Confirmed");
    }

    #[test]
    fn test_parse_top_level_entities() {
        let body = r#"[{
            "client": { "firstName": "Grace", "lastName": "Hopper" },
            "activity": { "externalId": "A2", "label": "Repair" },
            "program": { "externalId": "P2", "label": "Mobile" },
            "scheduledTime": "2024-03-15T09:00:00",
            "scheduledEndTime": "2024-03-15T09:30:00",
            "status": "pending"
        }]"#;

        let a = &parse_appointments(body).unwrap()[0];
        assert_eq!(a.client().full_name(), "Grace Hopper");
        assert_eq!(a.program().label, "Mobile");
    }

    #[test]
    fn test_missing_and_null_fields_are_blank() {
        let body = r#"[{ "status": null, "entities": { "client": { "firstName": "Solo" } } }, {}]"#;

        let appointments = parse_appointments(body).unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].client().full_name(), "Solo ");
        assert_eq!(appointments[0].status, "");
        assert_eq!(appointments[0].activity().label, "");
        assert_eq!(appointments[1], Appointment::default());
    }

    #[test]
    fn test_both_program_spellings_on_one_record() {
        let body = r#"[
            {
                "entities": {
                    "client": { "firstName": "Ada", "lastName": "Lovelace" },
                    "progam": { "externalId": "P1", "label": "Geek Squad" },
                    "program": { "externalId": "P2", "label": "Mobile" }
                },
                "status": "Confirmed"
            },
            { "program": { "label": "Top" }, "progam": { "label": "Level" } }
        ]"#;

        let appointments = parse_appointments(body).unwrap();
        assert_eq!(appointments.len(), 2);
        assert_eq!(appointments[0].program().label, "Geek Squad");
        assert_eq!(appointments[0].client().full_name(), "Ada Lovelace");
        assert_eq!(appointments[1].program().label, "Level");
    }

    #[test]
    fn test_end_time_falls_back_to_scheduled_end() {
        let body = r#"[{ "scheduledTime": "2024-03-15T14:30:00Z", "scheduledEnd": "2024-03-15T16:00:00Z" }]"#;
        let a = &parse_appointments(body).unwrap()[0];
        assert_eq!(a.end_time(), "2024-03-15T16:00:00Z");
    }

    #[test]
    fn test_order_is_preserved() {
        let body = r#"[
            { "status": "c", "scheduledTime": "2024-03-15T12:00:00Z" },
            { "status": "a", "scheduledTime": "2024-03-15T08:00:00Z" },
            { "status": "b", "scheduledTime": "2024-03-15T10:00:00Z" }
        ]"#;
        let statuses: Vec<_> = parse_appointments(body)
            .unwrap()
            .into_iter()
            .map(|a| a.status)
            .collect();
        assert_eq!(statuses, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_empty_array() {
        assert!(parse_appointments("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_is_parse_error() {
        let err = parse_appointments(r#"{"appointments": []}"#).unwrap_err();
        assert_eq!(err.kind(), "parse");

        let err = parse_appointments("<html>maintenance</html>").unwrap_err();
        assert_eq!(err.kind(), "parse");

        let err = parse_appointments("[1, 2]").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_serializes_feed_spelling() {
        let a = &parse_appointments(NESTED).unwrap()[0];
        let value = serde_json::to_value(a).unwrap();
        assert_eq!(value["entities"]["progam"]["label"], "Geek Squad");
        assert_eq!(value["scheduledEndTime"], "2024-03-15T15:00:00Z");
    }
}
