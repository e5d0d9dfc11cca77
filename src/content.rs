//! Static site content

/// A barbershop service with pricing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Price in USD
    pub price: u32,
    /// Duration in minutes
    pub duration: Option<u32>,
}

impl ServiceOffering {
    pub fn price_label(&self) -> String {
        match self.duration {
            Some(minutes) => format!("${} · {} min", self.price, minutes),
            None => format!("${}", self.price),
        }
    }
}

pub const BUSINESS_NAME: &str = "Blade and Barrel";
pub const TAGLINE: &str = "Groomed. Poured. Perfected.";
pub const HEADLINE: &str = "Tampa's Premier Barbershop Meets Neighborhood Bar";
pub const BOOK_CTA: &str = "Book Appointment";

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        id: "haircut",
        name: "Haircut",
        description: "Precision cut tailored to your style. Includes complimentary draft beer and expert consultation.",
        price: 35,
        duration: Some(45),
    },
    ServiceOffering {
        id: "beard-trim",
        name: "Beard Trim",
        description: "Expert beard sculpting and grooming to keep you looking sharp.",
        price: 25,
        duration: Some(30),
    },
    ServiceOffering {
        id: "hot-towel-shave",
        name: "Hot Towel Shave",
        description: "Traditional straight razor shave experience with hot towels and premium products.",
        price: 45,
        duration: Some(60),
    },
];

pub const ABOUT_TITLE: &str = "Our Story";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Welcome to Blade and Barrel, where exceptional grooming meets craft culture. \
     We blend premium men's grooming with the relaxed atmosphere of a neighborhood bar: \
     your haircut comes with a complimentary draft beer.",
    "By day we are your destination for precision haircuts, expert beard trims, and \
     traditional hot towel shaves. As evening approaches we become a community gathering \
     spot in Tampa's Channelside district.",
    "Founded by Rich Keeley, Blade and Barrel honors traditional barbering craftsmanship \
     while embracing contemporary social culture.",
];

pub const ADDRESS_LINES: &[&str] = &["232 N 11th St", "Tampa, FL 33602"];

pub const HOURS: &[(&str, &str)] = &[
    ("Barbershop", "Mon-Fri 9am-6pm, Sat 10am-5pm"),
    ("Bar", "Mon-Sat 4pm-11pm"),
    ("Sunday", "Closed"),
];

pub const PHONE: &str = "813-874-1508";
pub const EMAIL: &str = "help@bladeandbarrel.com";

pub const PARKING: &str = "Street parking available on N 11th Street. \
     Nearby public parking garage located at Channelside Bay Plaza.";
