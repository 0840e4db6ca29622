//! Polish holiday definitions.
//!
//! Fixed holidays fall on the same month-day every year (optionally only from
//! the year they were introduced or restored). Movable feasts are offsets in
//! days from Easter Sunday.

/// A holiday on a fixed month-day
pub(crate) struct FixedHoliday {
    /// 0-based month
    pub month: u32,
    pub day: u32,
    pub name: &'static str,
    pub english_name: &'static str,
    pub description: &'static str,
    /// Statutory day off
    pub public: bool,
    /// First year the holiday is observed in its current form
    pub since: Option<i32>,
}

impl FixedHoliday {
    pub fn applies_to(&self, year: i32) -> bool {
        self.since.map_or(true, |first| year >= first)
    }
}

/// A feast at a fixed offset from Easter Sunday
pub(crate) struct MovableHoliday {
    pub offset_days: i64,
    pub name: &'static str,
    pub english_name: &'static str,
    pub description: &'static str,
    pub public: bool,
}

pub(crate) const FIXED: &[FixedHoliday] = &[
    FixedHoliday {
        month: 0,
        day: 1,
        name: "Nowy Rok",
        english_name: "New Year's Day",
        description: "The first day of the year, a public holiday after the Sylwester celebrations of New Year's Eve.",
        public: true,
        since: None,
    },
    FixedHoliday {
        month: 0,
        day: 6,
        name: "Święto Trzech Króli",
        english_name: "Epiphany",
        description: "Three Kings' Day. Doors are chalked with K+M+B and the year; a public holiday again since 2011.",
        public: true,
        since: Some(2011),
    },
    FixedHoliday {
        month: 4,
        day: 1,
        name: "Święto Pracy",
        english_name: "Labour Day",
        description: "International Workers' Day; with 3 May it opens the long weekend known as 'majówka'.",
        public: true,
        since: Some(1950),
    },
    FixedHoliday {
        month: 4,
        day: 3,
        name: "Święto Narodowe Trzeciego Maja",
        english_name: "Constitution Day",
        description: "Commemorates the Constitution of 3 May 1791, the first modern constitution in Europe.",
        public: true,
        since: Some(1990),
    },
    FixedHoliday {
        month: 7,
        day: 15,
        name: "Wniebowzięcie Najświętszej Maryi Panny",
        english_name: "Assumption of Mary",
        description: "A major Catholic feast; herbs and flowers are blessed in churches.",
        public: true,
        since: None,
    },
    FixedHoliday {
        month: 7,
        day: 15,
        name: "Święto Wojska Polskiego",
        english_name: "Polish Armed Forces Day",
        description: "Marks the 1920 victory in the Battle of Warsaw, the 'Miracle on the Vistula'.",
        public: false,
        since: Some(1992),
    },
    FixedHoliday {
        month: 10,
        day: 1,
        name: "Wszystkich Świętych",
        english_name: "All Saints' Day",
        description: "Families visit graves and light candles; cemeteries glow through the night.",
        public: true,
        since: None,
    },
    FixedHoliday {
        month: 10,
        day: 11,
        name: "Narodowe Święto Niepodległości",
        english_name: "Independence Day",
        description: "Poland regained independence on 11 November 1918 after 123 years of partitions.",
        public: true,
        since: Some(1989),
    },
    FixedHoliday {
        month: 11,
        day: 24,
        name: "Wigilia Bożego Narodzenia",
        english_name: "Christmas Eve",
        description: "The main family celebration: twelve meatless dishes served once the first star appears. A public holiday since 2025.",
        public: true,
        since: Some(2025),
    },
    FixedHoliday {
        month: 11,
        day: 25,
        name: "Boże Narodzenie",
        english_name: "Christmas Day",
        description: "The first day of Christmas.",
        public: true,
        since: None,
    },
    FixedHoliday {
        month: 11,
        day: 26,
        name: "Drugi dzień Bożego Narodzenia",
        english_name: "St Stephen's Day",
        description: "The second day of Christmas, spent visiting family.",
        public: true,
        since: None,
    },
];

pub(crate) const MOVABLE: &[MovableHoliday] = &[
    MovableHoliday {
        offset_days: -52,
        name: "Tłusty Czwartek",
        english_name: "Fat Thursday",
        description: "The last Thursday before Lent, when everyone eats pączki (doughnuts).",
        public: false,
    },
    MovableHoliday {
        offset_days: -46,
        name: "Środa Popielcowa",
        english_name: "Ash Wednesday",
        description: "The first day of Lent; ashes are sprinkled on the head.",
        public: false,
    },
    MovableHoliday {
        offset_days: -2,
        name: "Wielki Piątek",
        english_name: "Good Friday",
        description: "A day of fasting and quiet before Easter.",
        public: false,
    },
    MovableHoliday {
        offset_days: 0,
        name: "Wielkanoc",
        english_name: "Easter Sunday",
        description: "Begins with a festive breakfast of the food blessed in the Saturday 'święconka' basket.",
        public: true,
    },
    MovableHoliday {
        offset_days: 1,
        name: "Poniedziałek Wielkanocny",
        english_name: "Easter Monday",
        description: "Śmigus-dyngus: people drench each other with water.",
        public: true,
    },
    MovableHoliday {
        offset_days: 49,
        name: "Zielone Świątki",
        english_name: "Pentecost",
        description: "Descent of the Holy Spirit; houses were traditionally decorated with green branches.",
        public: true,
    },
    MovableHoliday {
        offset_days: 60,
        name: "Boże Ciało",
        english_name: "Corpus Christi",
        description: "Processions walk between flower-strewn altars set up in the streets.",
        public: true,
    },
];
