//! Deserializers for numeric columns the backend sometimes sends as strings
//! (decimal columns arrive as `"150000.00"`).

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn parse(raw: Option<NumberOrString>) -> Option<f64> {
    match raw? {
        NumberOrString::Number(n) => Some(n),
        NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
    }
}

pub fn option_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse(Option::<NumberOrString>::deserialize(deserializer)?))
}

pub fn option_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse(Option::<NumberOrString>::deserialize(deserializer)?)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u32))
}

pub fn option_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(parse(Option::<NumberOrString>::deserialize(deserializer)?).map(|n| n as i64))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "super::option_f64")]
        price: Option<f64>,
        #[serde(default, deserialize_with = "super::option_u32")]
        capacity: Option<u32>,
        #[serde(default, deserialize_with = "super::option_id")]
        branch_id: Option<i64>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let row: Row =
            serde_json::from_str(r#"{"price":"150000.00","capacity":12,"branch_id":"3"}"#).unwrap();
        assert_eq!(row.price, Some(150000.0));
        assert_eq!(row.capacity, Some(12));
        assert_eq!(row.branch_id, Some(3));
    }

    #[test]
    fn test_missing_null_and_garbage_become_none() {
        let row: Row = serde_json::from_str(r#"{"price":null,"capacity":"n/a"}"#).unwrap();
        assert_eq!(row.price, None);
        assert_eq!(row.capacity, None);
        assert_eq!(row.branch_id, None);
    }
}
