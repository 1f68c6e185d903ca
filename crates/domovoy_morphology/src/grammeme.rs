//! Parts of speech and grammemes.
//!
//! Names follow the OpenCorpora tag set, so dictionaries exported from it can
//! be loaded without translation.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use domovoy_foundation::{Error, Result};

/// Part of speech of a word form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Noun
    Noun,
    /// Full adjective
    AdjectiveFull,
    /// Short adjective
    AdjectiveShort,
    /// Comparative
    Comparative,
    /// Finite verb
    Verb,
    /// Infinitive
    Infinitive,
    /// Full participle
    ParticipleFull,
    /// Short participle
    ParticipleShort,
    /// Gerund
    Gerund,
    /// Numeral
    Numeral,
    /// Adverb
    Adverb,
    /// Pronoun-noun
    Pronoun,
    /// Predicative
    Predicative,
    /// Preposition
    Preposition,
    /// Conjunction
    Conjunction,
    /// Particle
    Particle,
    /// Interjection
    Interjection,
}

impl PartOfSpeech {
    const NAMES: [(&'static str, Self); 17] = [
        ("NOUN", Self::Noun),
        ("ADJF", Self::AdjectiveFull),
        ("ADJS", Self::AdjectiveShort),
        ("COMP", Self::Comparative),
        ("VERB", Self::Verb),
        ("INFN", Self::Infinitive),
        ("PRTF", Self::ParticipleFull),
        ("PRTS", Self::ParticipleShort),
        ("GRND", Self::Gerund),
        ("NUMR", Self::Numeral),
        ("ADVB", Self::Adverb),
        ("NPRO", Self::Pronoun),
        ("PRED", Self::Predicative),
        ("PREP", Self::Preposition),
        ("CONJ", Self::Conjunction),
        ("PRCL", Self::Particle),
        ("INTJ", Self::Interjection),
    ];

    /// Returns the OpenCorpora name of this part of speech.
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, pos)| *pos == self)
            .map_or("UNKN", |(name, _)| name)
    }

    /// Returns true for finite verbs and infinitives.
    #[must_use]
    pub const fn is_verbal(self) -> bool {
        matches!(self, Self::Verb | Self::Infinitive)
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PartOfSpeech {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == s)
            .map(|(_, pos)| *pos)
            .ok_or_else(|| Error::invalid_tag(s, "unknown part of speech"))
    }
}

bitflags! {
    /// A set of grammemes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Grammemes: u128 {
        // Animacy
        const ANIM = 1 << 0;
        const INAN = 1 << 1;
        // Gender
        const MASC = 1 << 2;
        const FEMN = 1 << 3;
        const NEUT = 1 << 4;
        const MS_F = 1 << 5;
        // Number
        const SING = 1 << 6;
        const PLUR = 1 << 7;
        // Case
        const NOMN = 1 << 8;
        const GENT = 1 << 9;
        const DATV = 1 << 10;
        const ACCS = 1 << 11;
        const ABLT = 1 << 12;
        const LOCT = 1 << 13;
        const VOCT = 1 << 14;
        const GEN1 = 1 << 15;
        const GEN2 = 1 << 16;
        const ACC2 = 1 << 17;
        const LOC1 = 1 << 18;
        const LOC2 = 1 << 19;
        // Aspect
        const PERF = 1 << 20;
        const IMPF = 1 << 21;
        // Transitivity
        const TRAN = 1 << 22;
        const INTR = 1 << 23;
        // Tense
        const PRES = 1 << 24;
        const PAST = 1 << 25;
        const FUTR = 1 << 26;
        // Mood
        const INDC = 1 << 27;
        const IMPR = 1 << 28;
        // Involvement
        const INCL = 1 << 29;
        const EXCL = 1 << 30;
        // Person
        const PER1 = 1 << 31;
        const PER2 = 1 << 32;
        const PER3 = 1 << 33;
        // Voice
        const ACTV = 1 << 34;
        const PSSV = 1 << 35;
        // Lexical marks
        const QUAL = 1 << 36;
        const SGTM = 1 << 37;
        const PLTM = 1 << 38;
        const FIXD = 1 << 39;
        const ABBR = 1 << 40;
        const NAME = 1 << 41;
        const SURN = 1 << 42;
        const PATR = 1 << 43;
        const GEOX = 1 << 44;
        const ORGN = 1 << 45;
        const TRAD = 1 << 46;
        const SUBX = 1 << 47;
        const SUPR = 1 << 48;
        const APRO = 1 << 49;
        const ANUM = 1 << 50;
        const POSS = 1 << 51;
        const V_EY = 1 << 52;
        const V_OY = 1 << 53;
        const CMP2 = 1 << 54;
        const V_EJ = 1 << 55;
        const IMPE = 1 << 56;
        const IMPX = 1 << 57;
        const MULT = 1 << 58;
        const REFL = 1 << 59;
        const INFR = 1 << 60;
        const SLNG = 1 << 61;
        const ARCH = 1 << 62;
        const LITR = 1 << 63;
        const ERRO = 1 << 64;
        const DIST = 1 << 65;
        const QUES = 1 << 66;
        const DMNS = 1 << 67;
        const PRNT = 1 << 68;
        const V_BE = 1 << 69;
        const V_EN = 1 << 70;
        const V_IE = 1 << 71;
        const V_BI = 1 << 72;
        const FIMP = 1 << 73;
        const PRDX = 1 << 74;
        const COUN = 1 << 75;
        const COLL = 1 << 76;
        const V_SH = 1 << 77;
        const AF_P = 1 << 78;
        const INMX = 1 << 79;
        const VPRE = 1 << 80;
        const ANPH = 1 << 81;
        const INIT = 1 << 82;
        const ADJX = 1 << 83;
        const HYPO = 1 << 84;
        const GNDR = 1 << 85;
    }
}

/// A grammatical category: a group of mutually exclusive grammemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// anim / inan
    Animacy,
    /// masc / femn / neut / Ms-f
    Gender,
    /// sing / plur
    Number,
    /// nomn, gent, datv, accs, ablt, loct, voct and the secondary cases
    Case,
    /// perf / impf
    Aspect,
    /// tran / intr
    Transitivity,
    /// pres / past / futr
    Tense,
    /// indc / impr
    Mood,
    /// incl / excl
    Involvement,
    /// 1per / 2per / 3per
    Person,
    /// actv / pssv
    Voice,
}

impl Category {
    /// All categories, in tag display order.
    pub const ALL: [Self; 11] = [
        Self::Animacy,
        Self::Gender,
        Self::Number,
        Self::Case,
        Self::Aspect,
        Self::Transitivity,
        Self::Tense,
        Self::Mood,
        Self::Involvement,
        Self::Person,
        Self::Voice,
    ];

    /// Returns every grammeme belonging to this category.
    #[must_use]
    pub const fn members(self) -> Grammemes {
        match self {
            Self::Animacy => Grammemes::ANIM.union(Grammemes::INAN),
            Self::Gender => Grammemes::MASC
                .union(Grammemes::FEMN)
                .union(Grammemes::NEUT)
                .union(Grammemes::MS_F),
            Self::Number => Grammemes::SING.union(Grammemes::PLUR),
            Self::Case => Grammemes::NOMN
                .union(Grammemes::GENT)
                .union(Grammemes::DATV)
                .union(Grammemes::ACCS)
                .union(Grammemes::ABLT)
                .union(Grammemes::LOCT)
                .union(Grammemes::VOCT)
                .union(Grammemes::GEN1)
                .union(Grammemes::GEN2)
                .union(Grammemes::ACC2)
                .union(Grammemes::LOC1)
                .union(Grammemes::LOC2),
            Self::Aspect => Grammemes::PERF.union(Grammemes::IMPF),
            Self::Transitivity => Grammemes::TRAN.union(Grammemes::INTR),
            Self::Tense => Grammemes::PRES
                .union(Grammemes::PAST)
                .union(Grammemes::FUTR),
            Self::Mood => Grammemes::INDC.union(Grammemes::IMPR),
            Self::Involvement => Grammemes::INCL.union(Grammemes::EXCL),
            Self::Person => Grammemes::PER1
                .union(Grammemes::PER2)
                .union(Grammemes::PER3),
            Self::Voice => Grammemes::ACTV.union(Grammemes::PSSV),
        }
    }
}

const GRAMMEME_NAMES: [(&str, Grammemes); 86] = [
    ("anim", Grammemes::ANIM),
    ("inan", Grammemes::INAN),
    ("masc", Grammemes::MASC),
    ("femn", Grammemes::FEMN),
    ("neut", Grammemes::NEUT),
    ("Ms-f", Grammemes::MS_F),
    ("sing", Grammemes::SING),
    ("plur", Grammemes::PLUR),
    ("nomn", Grammemes::NOMN),
    ("gent", Grammemes::GENT),
    ("datv", Grammemes::DATV),
    ("accs", Grammemes::ACCS),
    ("ablt", Grammemes::ABLT),
    ("loct", Grammemes::LOCT),
    ("voct", Grammemes::VOCT),
    ("gen1", Grammemes::GEN1),
    ("gen2", Grammemes::GEN2),
    ("acc2", Grammemes::ACC2),
    ("loc1", Grammemes::LOC1),
    ("loc2", Grammemes::LOC2),
    ("perf", Grammemes::PERF),
    ("impf", Grammemes::IMPF),
    ("tran", Grammemes::TRAN),
    ("intr", Grammemes::INTR),
    ("pres", Grammemes::PRES),
    ("past", Grammemes::PAST),
    ("futr", Grammemes::FUTR),
    ("indc", Grammemes::INDC),
    ("impr", Grammemes::IMPR),
    ("incl", Grammemes::INCL),
    ("excl", Grammemes::EXCL),
    ("1per", Grammemes::PER1),
    ("2per", Grammemes::PER2),
    ("3per", Grammemes::PER3),
    ("actv", Grammemes::ACTV),
    ("pssv", Grammemes::PSSV),
    ("Qual", Grammemes::QUAL),
    ("Sgtm", Grammemes::SGTM),
    ("Pltm", Grammemes::PLTM),
    ("Fixd", Grammemes::FIXD),
    ("Abbr", Grammemes::ABBR),
    ("Name", Grammemes::NAME),
    ("Surn", Grammemes::SURN),
    ("Patr", Grammemes::PATR),
    ("Geox", Grammemes::GEOX),
    ("Orgn", Grammemes::ORGN),
    ("Trad", Grammemes::TRAD),
    ("Subx", Grammemes::SUBX),
    ("Supr", Grammemes::SUPR),
    ("Apro", Grammemes::APRO),
    ("Anum", Grammemes::ANUM),
    ("Poss", Grammemes::POSS),
    ("V-ey", Grammemes::V_EY),
    ("V-oy", Grammemes::V_OY),
    ("Cmp2", Grammemes::CMP2),
    ("V-ej", Grammemes::V_EJ),
    ("Impe", Grammemes::IMPE),
    ("Impx", Grammemes::IMPX),
    ("Mult", Grammemes::MULT),
    ("Refl", Grammemes::REFL),
    ("Infr", Grammemes::INFR),
    ("Slng", Grammemes::SLNG),
    ("Arch", Grammemes::ARCH),
    ("Litr", Grammemes::LITR),
    ("Erro", Grammemes::ERRO),
    ("Dist", Grammemes::DIST),
    ("Ques", Grammemes::QUES),
    ("Dmns", Grammemes::DMNS),
    ("Prnt", Grammemes::PRNT),
    ("V-be", Grammemes::V_BE),
    ("V-en", Grammemes::V_EN),
    ("V-ie", Grammemes::V_IE),
    ("V-bi", Grammemes::V_BI),
    ("Fimp", Grammemes::FIMP),
    ("Prdx", Grammemes::PRDX),
    ("Coun", Grammemes::COUN),
    ("Coll", Grammemes::COLL),
    ("V-sh", Grammemes::V_SH),
    ("Af-p", Grammemes::AF_P),
    ("Inmx", Grammemes::INMX),
    ("Vpre", Grammemes::VPRE),
    ("Anph", Grammemes::ANPH),
    ("Init", Grammemes::INIT),
    ("Adjx", Grammemes::ADJX),
    ("Hypo", Grammemes::HYPO),
    ("GNdr", Grammemes::GNDR),
];

impl Grammemes {
    /// Looks up a single grammeme by its OpenCorpora name.
    #[must_use]
    pub fn from_opencorpora(name: &str) -> Option<Self> {
        GRAMMEME_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, g)| *g)
    }

    /// Parses a comma- or space-separated list of grammeme names.
    ///
    /// Unknown lexical marks (capitalised names such as `Erro`) are skipped
    /// with a warning; they never take part in inflection.
    ///
    /// # Errors
    ///
    /// Returns an error if a lowercase name is not a known grammeme.
    pub fn parse_list(text: &str) -> Result<Self> {
        text.split([',', ' '])
            .filter(|part| !part.is_empty())
            .try_fold(Self::empty(), |acc, part| match Self::from_opencorpora(part) {
                Some(g) => Ok(acc | g),
                None if part.starts_with(|c: char| c.is_ascii_uppercase()) => {
                    tracing::warn!(grammeme = part, "skipping unknown lexical mark");
                    Ok(acc)
                }
                None => Err(Error::invalid_tag(text, format!("unknown grammeme '{part}'"))),
            })
    }

    /// Returns the grammemes of `self` that belong to `category`.
    #[must_use]
    pub fn in_category(self, category: Category) -> Self {
        self & category.members()
    }

    /// Replaces every category present in `with` by the grammemes of `with`.
    ///
    /// Categories absent from `with` are left untouched, so `replace` never
    /// produces two grammemes of one category.
    #[must_use]
    pub fn replace(self, with: Self) -> Self {
        let cleared = Category::ALL
            .iter()
            .filter(|category| !with.in_category(**category).is_empty())
            .fold(self, |acc, category| acc - category.members());
        cleared | with
    }

    /// Returns the OpenCorpora names of the grammemes in this set.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        GRAMMEME_NAMES
            .iter()
            .filter(move |(_, g)| self.contains(*g))
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Grammemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.names().collect();
        f.write_str(&names.join(","))
    }
}
