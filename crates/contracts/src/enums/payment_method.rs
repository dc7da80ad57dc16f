use serde::{Deserialize, Serialize};

/// How a payment was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Pix,
    Cash,
    Courtesy,
}

impl PaymentMethod {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Courtesy => "Courtesy",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Pix,
            PaymentMethod::Cash,
            PaymentMethod::Courtesy,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pix" => Some(PaymentMethod::Pix),
            "Cash" => Some(PaymentMethod::Cash),
            "Courtesy" => Some(PaymentMethod::Courtesy),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
