use serde::{Deserialize, Serialize};

/// One candidate grid point of a correlation run together with its quality coefficient.
///
/// The coefficient follows a *lower is better* convention. Producers whose metric grows
/// with match quality (e.g. a raw ZNCC score) must transform it before constructing a
/// result, typically by negating it or turning it into a residual.
///
/// A `RankedResult` carries no ordering of its own; see
/// [`rank_order`](crate::ranking::rank_order) for how results are ranked against each other.
///
/// # Example
/// ```
/// use dicrank::ranking::RankedResult;
///
/// let r = RankedResult::new(0.25, 4, 7);
/// assert_eq!((r.row, r.col), (4, 7));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    /// Quality/error metric of the point. Lower ranks first.
    #[serde(with = "coefficient_repr")]
    pub coefficient: f64,

    /// Grid row of the point. Not bounds-checked.
    pub row: i32,

    /// Grid column of the point. Not bounds-checked.
    pub col: i32,
}

impl RankedResult {
    pub fn new(coefficient: f64, row: i32, col: i32) -> Self {
        RankedResult {
            coefficient,
            row,
            col,
        }
    }

    /// The zero result: coefficient 0 at grid position (0, 0).
    ///
    /// Meant for callers that allocate first and fill in the fields later, like
    /// array-of-structs front ends of numeric environments. Pair it with [`populate`].
    ///
    /// [`populate`]: RankedResult::populate
    ///
    /// ```
    /// use dicrank::ranking::RankedResult;
    ///
    /// let mut slots = vec![RankedResult::empty(); 2];
    /// slots[1].populate(-0.5, 3, 1);
    /// assert_eq!(slots[0], RankedResult::new(0.0, 0, 0));
    /// assert_eq!(slots[1], RankedResult::new(-0.5, 3, 1));
    /// ```
    pub fn empty() -> Self {
        RankedResult::new(0.0, 0, 0)
    }

    /// Fills in every field of an owned result. Once a result is handed to a
    /// [`ResultQueue`](crate::ranking::ResultQueue) it can no longer be reached mutably.
    pub fn populate(&mut self, coefficient: f64, row: i32, col: i32) {
        self.coefficient = coefficient;
        self.row = row;
        self.col = col;
    }

    /// Grid position as `(row, col)`.
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

impl Default for RankedResult {
    fn default() -> Self {
        RankedResult::empty()
    }
}

/// JSON has no literal for NaN or the infinities, so those are written as the strings
/// `"NaN"`, `"inf"` and `"-inf"`. Finite values stay plain numbers.
mod coefficient_repr {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_str("NaN")
        } else if *value == f64::INFINITY {
            serializer.serialize_str("inf")
        } else if *value == f64::NEG_INFINITY {
            serializer.serialize_str("-inf")
        } else {
            serializer.serialize_f64(*value)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => match text.as_str() {
                "NaN" => Ok(f64::NAN),
                "inf" => Ok(f64::INFINITY),
                "-inf" => Ok(f64::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "invalid coefficient {other:?}, expected a number, \"NaN\", \"inf\" or \"-inf\""
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_fields_untouched() {
        let r = RankedResult::new(-3.5, -1, 1_000_000);
        assert_eq!(r.coefficient, -3.5);
        assert_eq!(r.row, -1);
        assert_eq!(r.col, 1_000_000);
    }

    #[test]
    fn test_empty_is_zero() {
        let r = RankedResult::empty();
        assert_eq!(r.coefficient, 0.0);
        assert_eq!(r.position(), (0, 0));
    }

    #[test]
    fn test_default_matches_empty() {
        assert_eq!(RankedResult::default(), RankedResult::empty());
    }

    #[test]
    fn test_populate_overwrites_every_field() {
        let mut r = RankedResult::empty();
        r.populate(2.0, 5, 6);
        assert_eq!(r, RankedResult::new(2.0, 5, 6));

        r.populate(-1.0, 0, 9);
        assert_eq!(r, RankedResult::new(-1.0, 0, 9));
    }

    #[test]
    fn test_field_by_field_population() {
        let mut r = RankedResult::empty();
        r.coefficient = 0.75;
        r.col = 12;
        assert_eq!(r, RankedResult::new(0.75, 0, 12));
    }

    #[test]
    fn test_accepts_non_finite_coefficients() {
        let r = RankedResult::new(f64::INFINITY, 0, 0);
        assert!(r.coefficient.is_infinite());
        let r = RankedResult::new(f64::NAN, 0, 0);
        assert!(r.coefficient.is_nan());
    }

    #[test]
    fn test_json_field_names() {
        let r = RankedResult::new(1.5, 2, 3);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"coefficient":1.5,"row":2,"col":3}"#);
        let back: RankedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_json_keeps_non_finite_coefficients() {
        let results = vec![
            RankedResult::new(f64::INFINITY, 3, 4),
            RankedResult::new(f64::NEG_INFINITY, 0, 0),
            RankedResult::new(f64::NAN, 1, 2),
        ];
        let json = serde_json::to_string(&results).unwrap();
        assert_eq!(
            json,
            r#"[{"coefficient":"inf","row":3,"col":4},{"coefficient":"-inf","row":0,"col":0},{"coefficient":"NaN","row":1,"col":2}]"#
        );

        let back: Vec<RankedResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(back[0], results[0]);
        assert_eq!(back[1], results[1]);
        assert!(back[2].coefficient.is_nan());
        assert_eq!(back[2].position(), (1, 2));
    }

    #[test]
    fn test_json_integer_coefficient() {
        let r: RankedResult =
            serde_json::from_str(r#"{"coefficient":-3,"row":0,"col":1}"#).unwrap();
        assert_eq!(r, RankedResult::new(-3.0, 0, 1));
    }

    #[test]
    fn test_json_rejects_unknown_coefficient_text() {
        for text in [
            r#"{"coefficient":"big","row":0,"col":0}"#,
            r#"{"coefficient":null,"row":0,"col":0}"#,
        ] {
            assert!(serde_json::from_str::<RankedResult>(text).is_err());
        }
    }
}
