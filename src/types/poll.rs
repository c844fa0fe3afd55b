use super::{unix_time, MessageEntity, User};
use chrono::{DateTime, Utc};

api_object! {
    pub struct Poll {
        pub id: String,
        pub question: String,
        pub options: Vec<PollOption>,
        pub total_voter_count: i64,
        pub is_closed: bool,
        pub is_anonymous: bool,
        /// `regular` or `quiz`.
        pub kind: String => "type",
        pub allows_multiple_answers: bool,
        /// Only visible for quizzes that are closed or were sent by the bot.
        pub correct_option_id: Option<i64>,
        pub explanation: Option<String>,
        pub explanation_entities: Option<Vec<MessageEntity>>,
        pub open_period: Option<i64>,
        pub close_date: Option<i64>,
    }
}

api_object! {
    pub struct PollOption {
        pub text: String,
        pub voter_count: i64,
    }
}

api_object! {
    /// A user's answer in a non-anonymous poll.
    pub struct PollAnswer {
        pub poll_id: String,
        pub user: User,
        /// Empty when the vote was retracted.
        pub option_ids: Vec<i64>,
    }
}

api_object! {
    /// An animated emoji with a random value.
    pub struct Dice {
        pub emoji: String,
        pub value: i64,
    }
}

api_object! {
    pub struct Location {
        pub longitude: f64,
        pub latitude: f64,
        pub horizontal_accuracy: Option<f64>,
        pub live_period: Option<i64>,
        pub heading: Option<i64>,
        pub proximity_alert_radius: Option<i64>,
    }
}

api_object! {
    pub struct Venue {
        pub location: Location,
        pub title: String,
        pub address: String,
        pub foursquare_id: Option<String>,
        pub foursquare_type: Option<String>,
        pub google_place_id: Option<String>,
        pub google_place_type: Option<String>,
    }
}

api_object! {
    pub struct Contact {
        pub phone_number: String,
        pub first_name: String,
        pub last_name: Option<String>,
        pub user_id: Option<i64>,
        pub vcard: Option<String>,
    }
}

impl Poll {
    pub fn close_time(&self) -> Option<DateTime<Utc>> {
        self.close_date.and_then(unix_time)
    }

    pub fn is_quiz(&self) -> bool {
        self.kind == "quiz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ApiObject;
    use crate::Error;
    use serde_json::{json, Value};

    fn as_map(value: Value) -> crate::object::Array {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_quiz_poll() {
        let poll = Poll::from_array(&as_map(json!({
            "id": "p1",
            "question": "2 + 2?",
            "options": [{"text": "4", "voter_count": 3}, {"text": "5", "voter_count": 0}],
            "total_voter_count": 3,
            "is_closed": true,
            "is_anonymous": true,
            "type": "quiz",
            "allows_multiple_answers": false,
            "correct_option_id": 0,
            "close_date": 1_600_000_000
        })))
        .unwrap()
        .unwrap();

        assert!(poll.is_quiz());
        assert_eq!(poll.options[0].voter_count, 3);
        assert_eq!(poll.close_time().unwrap().timestamp(), 1_600_000_000);
    }

    #[test]
    fn test_retracted_vote_keeps_empty_list() {
        let answer = PollAnswer::from_array(&as_map(json!({
            "poll_id": "p1",
            "user": {"id": 1, "is_bot": false, "first_name": "A"},
            "option_ids": []
        })))
        .unwrap()
        .unwrap();

        assert!(answer.option_ids.is_empty());
        assert_eq!(answer.to_array().unwrap()["option_ids"], json!([]));
    }

    #[test]
    fn test_location_accepts_integer_coordinates() {
        let venue = Venue::from_array(&as_map(json!({
            "location": {"longitude": 13, "latitude": 52.5},
            "title": "Office",
            "address": "Main St 1"
        })))
        .unwrap()
        .unwrap();
        assert_eq!(venue.location.longitude, 13.0);
    }

    #[test]
    fn test_location_rejects_string_coordinates() {
        let err = Location::validate_array(&as_map(json!({"longitude": "13", "latitude": 52.5})))
            .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref field, .. } if field == "longitude"));
    }
}
