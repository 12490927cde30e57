// ============================================================================
// Glyph Tables
// Immutable digit and unit vocabularies for financial numerals
// ============================================================================

/// Digit glyphs, indexed by digit value.
pub const DIGIT_GLYPHS: [char; 10] = ['零', '壹', '贰', '叁', '肆', '伍', '陆', '柒', '捌', '玖'];

/// Unit glyph for each integer position, indexed by distance from the
/// decimal point (0 = ones). Place units repeat per 4-digit group and the
/// group unit takes the first slot of each group.
pub const UNIT_GLYPHS: [char; 17] = [
    '元', '拾', '佰', '仟', // ones group
    '万', '拾', '佰', '仟', // 10^4
    '亿', '拾', '佰', '仟', // 10^8
    '万', '拾', '佰', '仟', // 10^12
    '亿', // 10^16
];

/// Unit positions that are written even when their digit is zero.
pub const BOUNDARY_UNIT_INDICES: [usize; 4] = [0, 4, 8, 12];

/// Zero glyph, also used alone to mark an elided run of zeros.
pub const ZERO: char = DIGIT_GLYPHS[0];

/// Suffix for amounts without jiao or fen.
pub const EVEN: char = '整';

/// Base unit (yuan).
pub const YUAN: char = '元';

/// Tenths unit.
pub const JIAO: char = '角';

/// Hundredths unit.
pub const FEN: char = '分';

/// Literal sequence the encoder collapses after writing the integer part.
pub const YI_WAN: &str = "亿万";

/// Replacement for [`YI_WAN`].
pub const YI: &str = "亿";

/// Place unit within a 4-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceUnit {
    /// 元
    Ones,
    /// 拾
    Ten,
    /// 佰
    Hundred,
    /// 仟
    Thousand,
}

impl PlaceUnit {
    /// Place value of the unit.
    #[inline]
    pub const fn multiplier(self) -> u32 {
        match self {
            PlaceUnit::Ones => 1,
            PlaceUnit::Ten => 10,
            PlaceUnit::Hundred => 100,
            PlaceUnit::Thousand => 1000,
        }
    }
}

/// Single-glyph group unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupUnit {
    /// 万
    Wan,
    /// 亿
    Yi,
}

/// Fractional unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalUnit {
    /// 角
    Jiao,
    /// 分
    Fen,
}

impl DecimalUnit {
    /// Number of fractional digits the unit stands for.
    #[inline]
    pub const fn scale(self) -> u32 {
        match self {
            DecimalUnit::Jiao => 1,
            DecimalUnit::Fen => 2,
        }
    }
}

/// Classification of a character in the numeral vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Digit(u8),
    Place(PlaceUnit),
    Group(GroupUnit),
    Decimal(DecimalUnit),
    Even,
}

impl Glyph {
    /// Classify a character, or `None` if it is outside the vocabulary.
    pub const fn classify(c: char) -> Option<Self> {
        let glyph = match c {
            '零' => Glyph::Digit(0),
            '壹' => Glyph::Digit(1),
            '贰' => Glyph::Digit(2),
            '叁' => Glyph::Digit(3),
            '肆' => Glyph::Digit(4),
            '伍' => Glyph::Digit(5),
            '陆' => Glyph::Digit(6),
            '柒' => Glyph::Digit(7),
            '捌' => Glyph::Digit(8),
            '玖' => Glyph::Digit(9),
            '元' => Glyph::Place(PlaceUnit::Ones),
            '拾' => Glyph::Place(PlaceUnit::Ten),
            '佰' => Glyph::Place(PlaceUnit::Hundred),
            '仟' => Glyph::Place(PlaceUnit::Thousand),
            '万' => Glyph::Group(GroupUnit::Wan),
            '亿' => Glyph::Group(GroupUnit::Yi),
            '角' => Glyph::Decimal(DecimalUnit::Jiao),
            '分' => Glyph::Decimal(DecimalUnit::Fen),
            '整' => Glyph::Even,
            _ => return None,
        };
        Some(glyph)
    }
}

/// Inverse of [`DIGIT_GLYPHS`].
#[inline]
pub const fn digit_value(c: char) -> Option<u8> {
    match Glyph::classify(c) {
        Some(Glyph::Digit(d)) => Some(d),
        _ => None,
    }
}

/// Group marker recognised by the decoder, possibly spanning several glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupMarker {
    /// 万万亿
    WanWanYi,
    /// 亿亿
    YiYi,
    /// 万亿
    WanYi,
    /// 亿
    Yi,
    /// 万
    Wan,
}

/// Group markers in matching order: longest alternatives first.
pub const GROUP_MARKERS: [GroupMarker; 5] = [
    GroupMarker::WanWanYi,
    GroupMarker::YiYi,
    GroupMarker::WanYi,
    GroupMarker::Yi,
    GroupMarker::Wan,
];

impl GroupMarker {
    /// Glyph sequence spelling the marker.
    pub const fn units(self) -> &'static [GroupUnit] {
        use GroupUnit::{Wan, Yi};
        match self {
            GroupMarker::WanWanYi => &[Wan, Wan, Yi],
            GroupMarker::YiYi => &[Yi, Yi],
            GroupMarker::WanYi => &[Wan, Yi],
            GroupMarker::Yi => &[Yi],
            GroupMarker::Wan => &[Wan],
        }
    }

    /// Power of ten the marker multiplies its group by.
    pub const fn exponent(self) -> u32 {
        match self {
            GroupMarker::WanWanYi | GroupMarker::YiYi => 16,
            GroupMarker::WanYi => 12,
            GroupMarker::Yi => 8,
            GroupMarker::Wan => 4,
        }
    }
}
