//! Chip denominations and the single-colour ways to pay a blind.

/// Physical chip colours, in ascending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    Red,
    Green,
    Black,
    Blue,
    White,
}

impl Chip {
    /// Every denomination, ascending by value.
    pub const ALL: [Chip; 5] = [Chip::Red, Chip::Green, Chip::Black, Chip::Blue, Chip::White];

    /// Value relative to a red chip.
    pub const fn value(self) -> u64 {
        match self {
            Chip::Red => 1,
            Chip::Green => 2,
            Chip::Black => 4,
            Chip::Blue => 8,
            Chip::White => 16,
        }
    }

    /// Lowercase colour name, also used as the CSS class of the chip circle.
    pub const fn as_str(self) -> &'static str {
        match self {
            Chip::Red => "red",
            Chip::Green => "green",
            Chip::Black => "black",
            Chip::Blue => "blue",
            Chip::White => "white",
        }
    }
}

/// Paying an amount with `count` chips of a single colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentOption {
    pub chip: Chip,
    pub count: u64,
}

/// All single-colour payments for `amount`, ascending by chip value.
///
/// A colour is offered only when it divides the amount exactly. A zero
/// amount needs no chips at all, so the list is empty.
pub fn payment_options(amount: u64) -> Vec<PaymentOption> {
    if amount == 0 {
        return Vec::new();
    }
    Chip::ALL
        .iter()
        .filter(|chip| amount % chip.value() == 0)
        .map(|&chip| PaymentOption {
            chip,
            count: amount / chip.value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ascending() {
        let values: Vec<u64> = Chip::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn options_follow_divisibility() {
        for amount in 1..=256u64 {
            let options = payment_options(amount);
            let expected: Vec<PaymentOption> = Chip::ALL
                .iter()
                .filter(|c| amount % c.value() == 0)
                .map(|&chip| PaymentOption { chip, count: amount / chip.value() })
                .collect();
            assert_eq!(options, expected, "amount {}", amount);
            assert!(options.windows(2).all(|w| w[0].chip.value() < w[1].chip.value()));
        }
    }

    #[test]
    fn small_amounts() {
        assert_eq!(
            payment_options(1),
            vec![PaymentOption { chip: Chip::Red, count: 1 }]
        );
        assert_eq!(
            payment_options(6),
            vec![
                PaymentOption { chip: Chip::Red, count: 6 },
                PaymentOption { chip: Chip::Green, count: 3 },
            ]
        );
        let big = payment_options(32);
        assert_eq!(big.len(), 5);
        assert_eq!(big[4], PaymentOption { chip: Chip::White, count: 2 });
    }

    #[test]
    fn zero_needs_no_chips() {
        assert!(payment_options(0).is_empty());
    }
}
