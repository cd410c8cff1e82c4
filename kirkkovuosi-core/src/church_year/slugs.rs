//! Slugs of the observances the generator emits under fixed names.
//!
//! Numbered observances (Advent Sundays, Sundays after Epiphany, Easter and
//! Pentecost) are built with `format!` in the generator and matched by
//! prefix/suffix elsewhere.

pub const FIRST_ADVENT: &str = "1-adventtisunnuntai";

pub const INDEPENDENCE_DAY: &str = "itsenaisyyspaiva";
pub const CHRISTMAS_EVE: &str = "jouluaatto";
pub const CHRISTMAS_DAY: &str = "joulupaiva";
pub const ST_STEPHEN: &str = "tapaninpaiva";
pub const ST_JOHN: &str = "apostoli-johanneksen-paiva";
pub const HOLY_INNOCENTS: &str = "viattomien-lasten-paiva";
pub const FIRST_SUNDAY_OF_CHRISTMAS: &str = "1-sunnuntai-joulusta";
pub const SECOND_SUNDAY_OF_CHRISTMAS: &str = "2-sunnuntai-joulusta";
pub const NEW_YEAR: &str = "uudenvuodenpaiva";
pub const EPIPHANY: &str = "loppiainen";
pub const ST_HENRIK: &str = "piispa-henrikin-muistopaiva";
pub const CANDLEMAS: &str = "kynttilanpaiva";

pub const SEPTUAGESIMA: &str = "3-sunnuntai-ennen-paastonaikaa";
pub const SEXAGESIMA: &str = "2-sunnuntai-ennen-paastonaikaa";
pub const QUINQUAGESIMA: &str = "laskiaissunnuntai";
pub const ASH_WEDNESDAY: &str = "tuhkakeskiviikko";
pub const ANNUNCIATION: &str = "marian-ilmestyspaiva";

pub const PALM_SUNDAY: &str = "palmusunnuntai";
pub const HOLY_MONDAY: &str = "hiljaisen-viikon-maanantai";
pub const HOLY_TUESDAY: &str = "hiljaisen-viikon-tiistai";
pub const HOLY_WEDNESDAY: &str = "hiljaisen-viikon-keskiviikko";
pub const MAUNDY_THURSDAY: &str = "kiirastorstai";
pub const GOOD_FRIDAY: &str = "pitkaperjantai";
pub const GOOD_FRIDAY_HOUR_OF_DEATH: &str = "kristuksen-kuolinhetki";
pub const GOOD_FRIDAY_EVENING: &str = "pitkaperjantain-iltajumalanpalvelus";
pub const HOLY_SATURDAY: &str = "hiljainen-lauantai";
pub const EASTER_VIGIL: &str = "paasiaisyo";
pub const EASTER_DAY: &str = "paasiaispaiva";
pub const EASTER_MONDAY: &str = "2-paasiaispaiva";

pub const ASCENSION: &str = "helatorstai";
pub const PENTECOST_EVE: &str = "helluntaiaatto";
pub const PENTECOST: &str = "helluntaipaiva";
pub const PENTECOST_WEEK: &str = "helluntaiviikko";
pub const TRINITY: &str = "pyhan-kolminaisuuden-paiva";

pub const MIDSUMMER: &str = "juhannuspaiva";
pub const APOSTLES_DAY: &str = "apostolien-paiva";
pub const TRANSFIGURATION: &str = "kirkastussunnuntai";
pub const MICHAELMAS: &str = "mikkelinpaiva";
pub const REFORMATION_DAY: &str = "uskonpuhdistuksen-muistopaiva";
pub const ALL_SAINTS: &str = "pyhainpaiva";
pub const WATCHFULNESS_SUNDAY: &str = "valvomisen-sunnuntai";
pub const JUDGEMENT_SUNDAY: &str = "tuomiosunnuntai";
