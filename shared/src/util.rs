/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms, collision-free at parish scale)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    // Custom epoch: 2024-01-01 00:00:00 UTC
    const EPOCH_MS: i64 = 1_704_067_200_000;
    let now = now_millis();
    let ts = (now - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}

/// Age in whole years on a given date, or None when the birth date is unknown
pub fn age_on(
    birth_date: Option<chrono::NaiveDate>,
    today: chrono::NaiveDate,
) -> Option<i32> {
    use chrono::Datelike;
    let birth = birth_date?;
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Some(age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_snowflake_ids_are_positive_and_distinct() {
        let a = snowflake_id();
        let b = snowflake_id();
        assert!(a > 0);
        assert!(b > 0);
        // Same millisecond is possible; random bits make collision unlikely
        // but not impossible, so only assert on the timestamp prefix.
        assert_eq!(a >> 12 >> 20, b >> 12 >> 20);
    }

    #[test]
    fn test_age_on_before_and_after_birthday() {
        let birth = NaiveDate::from_ymd_opt(1990, 6, 15);
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(age_on(birth, before), Some(33));
        assert_eq!(age_on(birth, after), Some(34));
        assert_eq!(age_on(None, after), None);
    }
}
