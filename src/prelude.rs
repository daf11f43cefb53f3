#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorsSqr{
    InvalidInputRange(&'static str),
    ZeroDivisor(&'static str),
    FailedToConverge(&'static str)
}
