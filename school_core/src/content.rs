//! Everything the page says.
//!
//! Plain `'static` records in display order. The components iterate these
//! arrays; nothing here is ever mutated.

use std::fmt;

/// Icons used on the page. Rendering lives with the components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Glyph {
    Phone,
    Mail,
    MapPin,
    Clock,
    GraduationCap,
    Heart,
    Users,
    BookOpen,
    Award,
    Menu,
    X,
    ChevronRight,
    Star,
    CheckCircle,
    Calendar,
    ArrowRight,
    Feather,
}

/// School identity shown in the navigation bar, hero and footer.
pub mod school {
    /// Full name.
    pub const NAME: &str = "Aviz Convent School";
    /// Line under the name.
    pub const TAGLINE: &str = "Comprehensive English Education";
    /// Year of establishment.
    pub const ESTABLISHED: u16 = 1999;
    /// Academic year admissions are open for.
    pub const ADMISSION_YEAR: &str = "2026-2027";
    /// Logo path, relative to the site root.
    pub const LOGO: &str = "/logo.png";
    /// Footer summary paragraph.
    pub const SUMMARY: &str = "Established in 1999, we are committed to providing quality \
        education with kindness at the core. Every child is known, valued, and supported \
        as an individual.";
    /// Footer bottom line.
    pub const CREDENTIALS: &str = "Established 1999 • UP Board • English Medium";
}

/// Card with an icon, a title and a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Icon shown on the card.
    pub glyph: Glyph,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
}

/// Big number with a caption under the hero text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStat {
    /// Figure, e.g. "25+".
    pub value: &'static str,
    /// Caption under it.
    pub caption: &'static str,
}

/// Externally hosted photograph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photo {
    /// Image URL.
    pub src: &'static str,
    /// Alt text.
    pub alt: &'static str,
}

/// Parent quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    /// Parent's name.
    pub name: &'static str,
    /// Relation to the school.
    pub role: &'static str,
    /// The quote, without quotation marks.
    pub quote: &'static str,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Numbered admission step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdmissionStep {
    /// Two-digit step number.
    pub step: &'static str,
    /// Step heading.
    pub title: &'static str,
    /// What happens in this step.
    pub description: &'static str,
}

/// Opening status for one weekday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opening {
    /// Open during the given time range.
    Open(&'static str),
    /// Closed all day.
    Closed,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opening::Open(range) => f.write_str(range),
            Opening::Closed => f.write_str("Closed"),
        }
    }
}

/// One row of the school hours table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchoolHours {
    /// Weekday name.
    pub day: &'static str,
    /// Hours on that day.
    pub opening: Opening,
}

impl SchoolHours {
    /// Closed days are accented in the tables.
    pub fn is_closed(&self) -> bool {
        self.opening == Opening::Closed
    }
}

/// Hero stats, left to right.
pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "25+", caption: "Years Experience" },
    HeroStat { value: "Pg-8", caption: "Classes Offered" },
    HeroStat { value: "UP", caption: "Board" },
];

/// Hero photograph.
pub const HERO_PHOTO: Photo = Photo {
    src: "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&h=600&fit=crop",
    alt: "Happy students learning",
};

/// About section cards.
pub const ABOUT_HIGHLIGHTS: [Highlight; 6] = [
    Highlight {
        glyph: Glyph::GraduationCap,
        title: "UP Board Curriculum",
        description: "Following UP Board syllabus with English medium instruction for Classes Playgroup to 8.",
    },
    Highlight {
        glyph: Glyph::Heart,
        title: "Safe & Nurturing",
        description: "A safe, disciplined, and nurturing environment where every child feels at home.",
    },
    Highlight {
        glyph: Glyph::Users,
        title: "Personal Attention",
        description: "Medium-sized school ensuring personal attention to every student's needs.",
    },
    Highlight {
        glyph: Glyph::Award,
        title: "Strong Pastoral Care",
        description: "Dedicated teacher guidance and strong pastoral care for student wellbeing.",
    },
    Highlight {
        glyph: Glyph::BookOpen,
        title: "Balanced Education",
        description: "Equal focus on academics, character building, and overall wellbeing.",
    },
    Highlight {
        glyph: Glyph::Star,
        title: "Community Trust",
        description: "Strong reputation in the local community built over two decades.",
    },
];

/// Philosophy pillars.
pub const PHILOSOPHY_PILLARS: [Highlight; 4] = [
    Highlight {
        glyph: Glyph::Heart,
        title: "Kindness at Core",
        description: "We nurture empathy, compassion, and strong moral values in every child.",
    },
    Highlight {
        glyph: Glyph::Feather,
        title: "Feathers to Fly",
        description: "Building confidence, independence, and self-belief for a bright future.",
    },
    Highlight {
        glyph: Glyph::Users,
        title: "Individual Attention",
        description: "Every child is known, valued, and supported as a unique individual.",
    },
    Highlight {
        glyph: Glyph::BookOpen,
        title: "21st Century Skills",
        description: "Communication, collaboration, creativity, and critical thinking.",
    },
];

/// Core values grid under the pillars.
pub const CORE_VALUES: [&str; 8] = [
    "Kindness & Empathy",
    "Strong Values",
    "Inclusive Education",
    "Innovative Learning",
    "Confidence Building",
    "Critical Thinking",
    "Collaboration",
    "Creativity",
];

/// Facilities checklist.
pub const FACILITIES: [&str; 6] = [
    "Experienced and caring teachers",
    "Smart classrooms with digital learning tools",
    "Well-ventilated classrooms and good campus space",
    "Focus on discipline, routine, and student safety",
    "Activity-based learning and student participation",
    "Regular assessments and academic tracking",
];

/// Facilities mosaic, two columns of two.
pub const FACILITY_PHOTOS: [Photo; 4] = [
    Photo {
        src: "https://images.unsplash.com/photo-1577896851231-70ef18881754?q=80&w=1170&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        alt: "Classroom",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?w=400&h=400&fit=crop",
        alt: "Students learning",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1549057736-889b732754a2?q=80&w=1044&auto=format&fit=crop&ixlib=rb-4.1.0&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
        alt: "School activities",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=400&h=300&fit=crop",
        alt: "Digital learning",
    },
];

/// Parent testimonials.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Mrs. Sharma",
        role: "Parent of Class 5 Student",
        quote: "Aviz Convent has transformed my daughter. She has become more confident and \
            expressive. The teachers truly care about each child's growth.",
    },
    Testimonial {
        name: "Mr. Khan",
        role: "Parent of Class 3 Student",
        quote: "The school's focus on values alongside academics is commendable. My son looks \
            forward to going to school every single day.",
    },
    Testimonial {
        name: "Mrs. Gupta",
        role: "Parent of Playgroup Student",
        quote: "A safe, nurturing environment where my little one feels at home. The personal \
            attention given to each child is remarkable.",
    },
];

/// Stars on every testimonial card.
pub const TESTIMONIAL_STARS: usize = 5;

/// Admission process.
pub const ADMISSION_STEPS: [AdmissionStep; 3] = [
    AdmissionStep {
        step: "01",
        title: "Visit School",
        description: "Come and explore our campus. Meet our faculty and see our facilities firsthand.",
    },
    AdmissionStep {
        step: "02",
        title: "Meet Faculty",
        description: "Have a conversation with our experienced teachers about your child's needs.",
    },
    AdmissionStep {
        step: "03",
        title: "Enroll",
        description: "Complete the simple enrollment process and secure your child's future.",
    },
];

const SCHOOL_DAY: Opening = Opening::Open("7:30 am – 1:10 pm");

/// Weekly timetable, Monday first.
pub const HOURS: [SchoolHours; 7] = [
    SchoolHours { day: "Monday", opening: SCHOOL_DAY },
    SchoolHours { day: "Tuesday", opening: SCHOOL_DAY },
    SchoolHours { day: "Wednesday", opening: SCHOOL_DAY },
    SchoolHours { day: "Thursday", opening: SCHOOL_DAY },
    SchoolHours { day: "Friday", opening: SCHOOL_DAY },
    SchoolHours { day: "Saturday", opening: SCHOOL_DAY },
    SchoolHours { day: "Sunday", opening: Opening::Closed },
];

/// Contact channels.
pub mod contact {
    /// Postal address, one entry per rendered line.
    pub const ADDRESS: [&str; 3] = [
        "Mozum Nagar, near Vivek Plywood,",
        "near Vikas Dairy, Lucknow,",
        "Uttar Pradesh – 226003",
    ];
    /// Phone number as displayed.
    pub const PHONE: &str = "08172948400";
    /// Dial link for every "Call" affordance.
    pub const PHONE_HREF: &str = "tel:08172948400";
    /// Email address as displayed.
    pub const EMAIL: &str = "avizimam@gmail.com";
    /// Mail link.
    pub const EMAIL_HREF: &str = "mailto:avizimam@gmail.com";
    /// Chat-app deep link carrying the same number in international form.
    pub const CHAT_HREF: &str = "https://wa.me/918172948400";
    /// Embedded map location.
    pub const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3559.234567890123!2d80.90123456789012!3d26.901234567890123!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMjbCsDU0JzA0LjQiTiA4MMKwNTQnMDQuNCJF!5e0!3m2!1sen!2sin!4v1234567890123!5m2!1sen!2sin";
    /// Accessible title of the map iframe.
    pub const MAP_TITLE: &str = "Aviz Convent School Location";
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_sunday_is_closed() {
        let closed: Vec<&str> = HOURS.iter().filter(|h| h.is_closed()).map(|h| h.day).collect();
        assert_eq!(closed, vec!["Sunday"]);
    }

    #[test]
    fn opening_display() {
        assert_eq!(HOURS[0].opening.to_string(), "7:30 am – 1:10 pm");
        assert_eq!(Opening::Closed.to_string(), "Closed");
    }

    #[test]
    fn testimonial_initials() {
        let initials: String = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, "MMM");
    }

    #[test]
    fn admission_steps_are_numbered_in_order() {
        let steps: Vec<&str> = ADMISSION_STEPS.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec!["01", "02", "03"]);
    }

    #[test]
    fn phone_links_carry_the_same_number() {
        assert!(contact::PHONE_HREF.ends_with(contact::PHONE));
        let national = contact::PHONE.trim_start_matches('0');
        assert!(contact::CHAT_HREF.ends_with(national));
        assert!(contact::EMAIL_HREF.ends_with(contact::EMAIL));
    }

    #[test]
    fn content_arrays_are_populated() {
        assert!(ABOUT_HIGHLIGHTS.iter().all(|h| !h.title.is_empty()));
        assert!(PHILOSOPHY_PILLARS.iter().all(|h| !h.description.is_empty()));
        assert!(FACILITY_PHOTOS.iter().all(|p| p.src.starts_with("https://")));
        assert!(CORE_VALUES.iter().all(|v| !v.is_empty()));
        assert!(FACILITIES.iter().all(|f| !f.is_empty()));
    }
}
