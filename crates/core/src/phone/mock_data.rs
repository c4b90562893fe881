use super::PhoneNumber;

/// Demo phone numbers: five records spread across customers 1, 1, 2, 2 and 3.
pub fn generate_seed_phone_numbers() -> Vec<PhoneNumber> {
    vec![
        PhoneNumber::new(1, "0411993721", 1).with_activated(true),
        PhoneNumber::new(2, "0411566778", 1),
        PhoneNumber::new(3, "0422993721", 2),
        PhoneNumber::new(4, "0422566778", 2).with_activated(true),
        PhoneNumber::new(5, "0433993721", 3).with_activated(true),
    ]
}
