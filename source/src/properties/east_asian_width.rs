use super::split_fields;
use super::PropertiesError;
use crate::CodepointRange;

/// ширина символа в восточноазиатской типографике, East_Asian_Width
/// берется из UCD: EastAsianWidth.txt
///
/// более детально - UAX #11, https://www.unicode.org/reports/tr11/
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EastAsianWidth
{
    /// A - неоднозначная ширина, зависит от контекста
    Ambiguous,
    /// F - полноширинные формы (например, U+FF01)
    Fullwidth,
    /// H - полуширинные формы (например, U+FF61)
    Halfwidth,
    /// N - нейтральные, в восточноазиатской типографике не встречаются
    Neutral,
    /// Na - узкие
    Narrow,
    /// W - широкие
    Wide,
    /// значение, которого нет в UAX #11 этой версии
    Unknown,
}

impl EastAsianWidth
{
    /// занимает две колонки?
    #[inline]
    pub fn is_wide(&self) -> bool
    {
        matches!(self, Self::Wide | Self::Fullwidth)
    }

    /// разобрать строку EastAsianWidth.txt:
    ///
    /// `3000..303E     ; W  # Po ...`
    pub fn parse_line(line: &str) -> Result<(CodepointRange, Self), PropertiesError>
    {
        let (range, value) = split_fields(line)?;

        Ok((range, Self::from(value)))
    }
}

impl From<&str> for EastAsianWidth
{
    #[inline]
    fn from(value: &str) -> Self
    {
        match value {
            "A" => Self::Ambiguous,
            "F" => Self::Fullwidth,
            "H" => Self::Halfwidth,
            "N" => Self::Neutral,
            "Na" => Self::Narrow,
            "W" => Self::Wide,
            _ => Self::Unknown,
        }
    }
}
