use lazy_static::lazy_static;

use crate::models::Customer;

lazy_static! {
    // Fixed reference directory, immutable for the process lifetime.
    static ref SAMPLE_CUSTOMERS: Vec<Customer> = vec![
        Customer {
            id: 1,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1234567890".to_string(),
        },
        Customer {
            id: 2,
            name: "Joel Smith".to_string(),
            email: "joel.smith@example.com".to_string(),
            phone: "+0987654321".to_string(),
        },
        Customer {
            id: 3,
            name: "Mike Bunny".to_string(),
            email: "mike@example.com".to_string(),
            phone: "+0987654321".to_string(),
        },
    ];
}

pub fn list_customers() -> &'static [Customer] {
    &SAMPLE_CUSTOMERS
}

/// Linear lookup by id; a miss is an empty result, not an error.
pub fn find_customer(id: i32) -> Option<&'static Customer> {
    SAMPLE_CUSTOMERS.iter().find(|customer| customer.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_contents() {
        let customers = list_customers();
        assert_eq!(customers.len(), 3);
        assert_eq!(customers[0].name, "John Doe");
    }

    #[test]
    fn test_find_known_customer() {
        let customer = find_customer(2).unwrap();
        assert_eq!(customer.name, "Joel Smith");
        assert_eq!(customer.email, "joel.smith@example.com");
    }

    #[test]
    fn test_find_unknown_customer_is_none() {
        assert!(find_customer(99).is_none());
    }
}
