//! Keyword tables driving the line classifier.
//!
//! The scoring functions are pure data-to-score lookups; everything
//! locale-specific lives in these tables. The default tables cover the
//! English/Chinese/Japanese mix found on East-Asian business cards; a
//! caller can inject alternates through [`Lexicon`].

/// Legal-entity suffixes marking a company line.
const LEGAL_ENTITY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Ltd", "Corp", "Corporation", "Co.", "GmbH", "S.A.", "Pte", "PLC", "AG", "KK",
    "有限公司", "股份有限公司", "株式会社", "合同会社", "有限会社", "주식회사",
];

/// Industry keywords that suggest (but do not prove) a company line.
const INDUSTRY_KEYWORDS: &[&str] = &[
    "Technology",
    "Technologies",
    "Capital",
    "Consulting",
    "Solutions",
    "Software",
    "Systems",
    "Industries",
    "Holdings",
    "Partners",
    "Ventures",
    "Studio",
    "Labs",
    "Group",
    "科技",
    "金融",
    "資本",
    "顧問",
    "商事",
    "貿易",
    "實業",
    "建設",
    "電子",
    "工業",
];

/// Job-title keywords, multilingual.
const JOB_TITLE_KEYWORDS: &[&str] = &[
    "CEO",
    "CTO",
    "CFO",
    "COO",
    "VP",
    "President",
    "Chairman",
    "Founder",
    "Co-Founder",
    "Director",
    "Manager",
    "Engineer",
    "Designer",
    "Architect",
    "Consultant",
    "Partner",
    "Lead",
    "Head",
    "Officer",
    "Specialist",
    "Analyst",
    "經理",
    "總監",
    "執行長",
    "董事長",
    "董事",
    "協理",
    "副總",
    "總裁",
    "工程師",
    "設計師",
    "顧問",
    "主任",
    "社長",
    "部長",
    "課長",
    "取締役",
    "代表",
    "エンジニア",
];

/// Address keywords; lines containing one are dropped before scoring.
const ADDRESS_KEYWORDS: &[&str] = &[
    "Street", "St.", "Ave", "Avenue", "Road", "Rd.", "Blvd", "Boulevard", "Floor", "Suite",
    "Building", "Room", "路", "街", "巷", "弄", "號", "号", "樓", "楼", "室", "丁目", "番地", "階",
];

/// Common single-character Chinese surnames.
const CHINESE_SURNAMES: &[char] = &[
    '陳', '林', '黃', '張', '李', '王', '吳', '劉', '蔡', '楊', '許', '鄭', '謝', '郭', '洪', '曾',
    '邱', '廖', '賴', '周', '徐', '蘇', '葉', '莊', '呂', '江', '何', '蕭', '羅', '高', '潘', '簡',
    '朱', '鍾', '彭', '游', '詹', '胡', '施', '沈', '余', '趙', '盧', '梁', '顏', '柯', '孫', '魏',
    '翁', '戴', '范', '宋', '方', '鄧', '杜', '傅', '侯', '曹', '薛', '丁', '卓', '馬', '董', '唐',
    '白', '金', '石', '韓', '馮', '姚', '袁', '田',
];

/// Two-character compound surnames, checked before the single-character
/// table.
const COMPOUND_SURNAMES: &[&str] = &[
    "歐陽", "司馬", "上官", "諸葛", "司徒", "東方", "西門", "南宮",
];

/// The keyword tables used by the classifier and splitters.
///
/// Holds borrowed slices so alternate tables cost nothing to build and
/// the default stays a plain data lookup.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub legal_suffixes: &'static [&'static str],
    pub industry_keywords: &'static [&'static str],
    pub title_keywords: &'static [&'static str],
    pub address_keywords: &'static [&'static str],
    pub chinese_surnames: &'static [char],
    pub compound_surnames: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            legal_suffixes: LEGAL_ENTITY_SUFFIXES,
            industry_keywords: INDUSTRY_KEYWORDS,
            title_keywords: JOB_TITLE_KEYWORDS,
            address_keywords: ADDRESS_KEYWORDS,
            chinese_surnames: CHINESE_SURNAMES,
            compound_surnames: COMPOUND_SURNAMES,
        }
    }
}

impl Lexicon {
    /// Returns whether the line contains a legal-entity suffix.
    #[must_use]
    pub fn has_legal_suffix(&self, line: &str) -> bool {
        self.legal_suffixes.iter().any(|s| line.contains(s))
    }

    /// Returns whether the line contains an industry keyword.
    #[must_use]
    pub fn has_industry_keyword(&self, line: &str) -> bool {
        self.industry_keywords.iter().any(|s| line.contains(s))
    }

    /// Returns whether the line contains a job-title keyword.
    #[must_use]
    pub fn has_title_keyword(&self, line: &str) -> bool {
        self.title_keywords.iter().any(|s| line.contains(s))
    }

    /// Returns whether the line looks like a postal address.
    #[must_use]
    pub fn is_address_line(&self, line: &str) -> bool {
        self.address_keywords.iter().any(|s| line.contains(s))
    }

    /// Returns whether the character is a common Chinese surname.
    #[must_use]
    pub fn is_surname(&self, c: char) -> bool {
        self.chinese_surnames.contains(&c)
    }

    /// Returns the compound surname the string starts with, if any.
    #[must_use]
    pub fn compound_surname(&self, s: &str) -> Option<&'static str> {
        self.compound_surnames
            .iter()
            .copied()
            .find(|prefix| s.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_suffix_matches_latin_and_cjk() {
        let lex = Lexicon::default();
        assert!(lex.has_legal_suffix("IrisGo Inc"));
        assert!(lex.has_legal_suffix("山海科技股份有限公司"));
        assert!(!lex.has_legal_suffix("Leo Man"));
    }

    #[test]
    fn suffix_matching_is_case_sensitive() {
        let lex = Lexicon::default();
        // Lowercase "inc" inside ordinary words must not fire
        assert!(!lex.has_legal_suffix("principal dancer"));
    }

    #[test]
    fn address_keywords_cover_cjk_forms() {
        let lex = Lexicon::default();
        assert!(lex.is_address_line("106台北市大安區信義路四段1號"));
        assert!(lex.is_address_line("5F, 100 Main Street"));
        assert!(!lex.is_address_line("Chief Executive Officer"));
    }

    #[test]
    fn compound_surname_lookup() {
        let lex = Lexicon::default();
        assert_eq!(lex.compound_surname("歐陽靖"), Some("歐陽"));
        assert_eq!(lex.compound_surname("陳大文"), None);
        assert!(lex.is_surname('陳'));
        assert!(!lex.is_surname('愛'));
    }
}
