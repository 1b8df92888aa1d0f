#[derive(Debug)]
pub enum ChanceError {
    InvertedRange,
    LengthMismatch { values: usize, weights: usize },
    Empty,
    NonFiniteTotal,
    Likelihood { value: i64 },
    AlphaAndSymbols,
    ZeroLength,
}

impl std::fmt::Display for ChanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChanceError::InvertedRange => write!(f, "min cannot be greater than max"),
            ChanceError::LengthMismatch { values, weights } => {
                write!(
                    f,
                    "values and weights differ in length: {values} vs {weights}"
                )
            }
            ChanceError::Empty => write!(f, "sequence is empty"),
            ChanceError::NonFiniteTotal => write!(f, "sum of weights is not finite"),
            ChanceError::Likelihood { value } => {
                write!(f, "likelihood accepts values from 0 to 100, got {value}")
            }
            ChanceError::AlphaAndSymbols => write!(f, "cannot request both alpha and symbols"),
            ChanceError::ZeroLength => write!(f, "length must be greater than zero"),
        }
    }
}

impl std::error::Error for ChanceError {}
