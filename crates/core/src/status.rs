//! Booking and order status sets.
//!
//! Both workflows start at `Pending`. There are no transition-from rules:
//! an authorized actor may set any valid status regardless of the current
//! value. Side effects (notifications) fire only when the value actually
//! changes, which callers detect by comparing against the prior status.

use std::fmt;
use std::str::FromStr;

/// Status of a hostel booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    /// All valid booking statuses, in lifecycle order.
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Rejected,
        BookingStatus::Cancelled,
    ];

    /// The string stored in the `bookings.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| invalid_status_message(s, &Self::ALL.map(Self::as_str)))
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a marketplace order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All valid order statuses, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// The string stored in the `orders.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| invalid_status_message(s, &Self::ALL.map(Self::as_str)))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation message listing the accepted values.
fn invalid_status_message(given: &str, valid: &[&str]) -> String {
    format!(
        "Invalid status '{given}'. Must be one of: {}",
        valid.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_statuses_round_trip() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_order_statuses_round_trip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_unknown_booking_status_rejected() {
        let err = "Confirmed".parse::<BookingStatus>().unwrap_err();
        assert!(err.contains("Invalid status 'Confirmed'"));
        assert!(err.contains("Pending, Approved, Rejected, Cancelled"));
    }

    #[test]
    fn test_unknown_order_status_rejected() {
        let err = "Returned".parse::<OrderStatus>().unwrap_err();
        assert!(err.contains("Invalid status 'Returned'"));
        assert!(err.contains("Shipped"));
    }

    #[test]
    fn test_status_parsing_is_case_sensitive() {
        // The stored values are capitalized; lowercase input is not accepted.
        assert!("approved".parse::<BookingStatus>().is_err());
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_empty_status_rejected() {
        assert!("".parse::<BookingStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }
}
