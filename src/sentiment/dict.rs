// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed Italian vocabulary for the sentiment model.
//!
//! The table mirrors the vocabulary the model was trained against: 242
//! words, indices 1..=242, with index 0 reserved as the out-of-vocabulary
//! and padding sentinel.

/// Index used for unknown words and for padding short sequences.
pub const UNKNOWN_INDEX: u32 = 0;

/// Number of words the model knows.
pub const VOCAB_LEN: usize = 242;

static VOCAB: [(&str, u32); VOCAB_LEN] = [
    ("a", 1),
    ("acquisto", 2),
    ("adoro", 3),
    ("affidabile", 4),
    ("aggiornamento", 5),
    ("alla", 6),
    ("alle", 7),
    ("annoiati", 8),
    ("app", 9),
    ("apprezzato", 10),
    ("aspettavo", 11),
    ("assaggiato", 12),
    ("avvincente", 13),
    ("bambini", 14),
    ("banale", 15),
    ("bellissimo", 16),
    ("ben", 17),
    ("blocca", 18),
    ("bruttissimo", 19),
    ("buono", 20),
    ("buttati", 21),
    ("cancellata", 22),
    ("capolavoro", 23),
    ("che", 24),
    ("chiare", 25),
    ("ci", 26),
    ("cibo", 27),
    ("cinematografia", 28),
    ("cinematografico", 29),
    ("città", 30),
    ("classica", 31),
    ("clienti", 32),
    ("coinvolgente", 33),
    ("commovente", 34),
    ("completamente", 35),
    ("complimenti", 36),
    ("concerto", 37),
    ("confusa", 38),
    ("confuse", 39),
    ("consiglio", 40),
    ("contento", 41),
    ("cuffie", 42),
    ("cui", 43),
    ("da", 44),
    ("dal", 45),
    ("dallinizio", 46),
    ("davvero", 47),
    ("dei", 48),
    ("del", 49),
    ("delizioso", 50),
    ("della", 51),
    ("dellattore", 52),
    ("delle", 53),
    ("deludente", 54),
    ("delusione", 55),
    ("deluso", 56),
    ("dettagliate", 57),
    ("di", 58),
    ("dimenticare", 59),
    ("disastro", 60),
    ("disgustoso", 61),
    ("disponibile", 62),
    ("disponibili", 63),
    ("dispositivo", 64),
    ("divertiti", 65),
    ("e", 66),
    ("eccellente", 67),
    ("eccezionale", 68),
    ("ed", 69),
    ("emozionante", 70),
    ("emozionato", 71),
    ("era", 72),
    ("erano", 73),
    ("esperienza", 74),
    ("estremamente", 75),
    ("evitare", 76),
    ("fantastica", 77),
    ("fantastico", 78),
    ("fastidiosa", 79),
    ("fatto", 80),
    ("felice", 81),
    ("film", 82),
    ("fine", 83),
    ("finirei", 84),
    ("fino", 85),
    ("fotografia", 86),
    ("fragile", 87),
    ("freddo", 88),
    ("gelato", 89),
    ("gentile", 90),
    ("giro", 91),
    ("ha", 92),
    ("ho", 93),
    ("hotel", 94),
    ("i", 95),
    ("il", 96),
    ("immangiabile", 97),
    ("impeccabile", 98),
    ("in", 99),
    ("inaspettata", 100),
    ("incredibile", 101),
    ("incredibilmente", 102),
    ("incubo", 103),
    ("indimenticabile", 104),
    ("insoddisfatto", 105),
    ("inutile", 106),
    ("inutili", 107),
    ("ispirato", 108),
    ("la", 109),
    ("lacrime", 110),
    ("laptop", 111),
    ("lavoro", 112),
    ("le", 113),
    ("lenta", 114),
    ("lento", 115),
    ("lettura", 116),
    ("lho", 117),
    ("libro", 118),
    ("lo", 119),
    ("lora", 120),
    ("ma", 121),
    ("magica", 122),
    ("mai", 123),
    ("male", 124),
    ("materiali", 125),
    ("me", 126),
    ("meglio", 127),
    ("meravigliosa", 128),
    ("mi", 129),
    ("miglior", 130),
    ("mio", 131),
    ("moltissimo", 132),
    ("molto", 133),
    ("momento", 134),
    ("musica", 135),
    ("negativa", 136),
    ("nessuno", 137),
    ("noiosa", 138),
    ("noioso", 139),
    ("non", 140),
    ("nuovo", 141),
    ("odiato", 142),
    ("odio", 143),
    ("odore", 144),
    ("oggi", 145),
    ("ogni", 146),
    ("online", 147),
    ("organizzata", 148),
    ("orribile", 149),
    ("ottima", 150),
    ("ottimo", 151),
    ("peggior", 152),
    ("peggiorato", 153),
    ("per", 154),
    ("perfetta", 155),
    ("perfetto", 156),
    ("performance", 157),
    ("personale", 158),
    ("pessima", 159),
    ("pessimo", 160),
    ("piace", 161),
    ("più", 162),
    ("poco", 163),
    ("pop", 164),
    ("positiva", 165),
    ("posti", 166),
    ("posto", 167),
    ("presentato", 168),
    ("preso", 169),
    ("prevedibile", 170),
    ("prodotto", 171),
    ("professionale", 172),
    ("profondamente", 173),
    ("profumo", 174),
    ("qualità", 175),
    ("questa", 176),
    ("questo", 177),
    ("regalo", 178),
    ("rispondono", 179),
    ("ristorante", 180),
    ("scadente", 181),
    ("scelta", 182),
    ("scortese", 183),
    ("scritto", 184),
    ("sempre", 185),
    ("senso", 186),
    ("sentito", 187),
    ("serata", 188),
    ("seria", 189),
    ("serie", 190),
    ("servizio", 191),
    ("sgarbato", 192),
    ("sgradevole", 193),
    ("shopping", 194),
    ("si", 195),
    ("sia", 196),
    ("sicuramente", 197),
    ("singolo", 198),
    ("smartphone", 199),
    ("soddisfatto", 200),
    ("soldi", 201),
    ("sono", 202),
    ("sorpresa", 203),
    ("sorpreso", 204),
    ("speciale", 205),
    ("spettacolare", 206),
    ("spettacolo", 207),
    ("spiegazioni", 208),
    ("sprecati", 209),
    ("squisito", 210),
    ("staff", 211),
    ("stata", 212),
    ("stato", 213),
    ("stupendi", 214),
    ("subito", 215),
    ("suono", 216),
    ("tantissimo", 217),
    ("tecnologia", 218),
    ("terribile", 219),
    ("toccato", 220),
    ("tornarci", 221),
    ("tornerò", 222),
    ("totale", 223),
    ("trama", 224),
    ("triste", 225),
    ("tutti", 226),
    ("tutto", 227),
    ("tv", 228),
    ("un", 229),
    ("una", 230),
    ("unavventura", 231),
    ("unazienda", 232),
    ("unica", 233),
    ("unottima", 234),
    ("uso", 235),
    ("utile", 236),
    ("utilissima", 237),
    ("vedo", 238),
    ("veloce", 239),
    ("vera", 240),
    ("viaggio", 241),
    ("è", 242),
];

/// Map one word to its vocabulary index.
///
/// Matching is exact and case-sensitive; any other spelling maps to
/// [`UNKNOWN_INDEX`].
pub fn lookup(word: &str) -> u32 {
    for &(entry, index) in VOCAB.iter() {
        if entry == word {
            return index;
        }
    }
    UNKNOWN_INDEX
}
