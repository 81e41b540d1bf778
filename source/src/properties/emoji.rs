use super::split_fields;
use super::PropertiesError;
use crate::CodepointRange;

/// свойства эмодзи
/// берется из UCD: emoji/emoji-data.txt
///
/// см. UTS #51, https://www.unicode.org/reports/tr51/#Emoji_Properties
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmojiProperty
{
    Emoji,
    /// по умолчанию отображается как цветной эмодзи, т.е. в две колонки
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    EmojiComponent,
    ExtendedPictographic,
    /// свойство, которого нет в UTS #51 этой версии
    Unknown,
}

impl EmojiProperty
{
    /// занимает две колонки?
    #[inline]
    pub fn is_wide(&self) -> bool
    {
        *self == Self::EmojiPresentation
    }

    /// разобрать строку emoji-data.txt:
    ///
    /// `1F600         ; Emoji_Presentation   # E1.0   [1] (😀)       grinning face`
    pub fn parse_line(line: &str) -> Result<(CodepointRange, Self), PropertiesError>
    {
        let (range, value) = split_fields(line)?;

        Ok((range, Self::from(value)))
    }
}

impl From<&str> for EmojiProperty
{
    #[inline]
    fn from(value: &str) -> Self
    {
        match value {
            "Emoji" => Self::Emoji,
            "Emoji_Presentation" => Self::EmojiPresentation,
            "Emoji_Modifier" => Self::EmojiModifier,
            "Emoji_Modifier_Base" => Self::EmojiModifierBase,
            "Emoji_Component" => Self::EmojiComponent,
            "Extended_Pictographic" => Self::ExtendedPictographic,
            _ => Self::Unknown,
        }
    }
}
