pub mod about;
pub mod categories;
pub mod contact;
pub mod filters;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod vehicle_card;

pub use about::AboutSection;
pub use categories::CategoriesSection;
pub use contact::ContactSection;
pub use filters::VehicleFilters;
pub use footer::Footer;
pub use hero::HeroSection;
pub use navigation::Navigation;
pub use vehicle_card::VehicleCard;

pub const WHATSAPP_URL: &str = "https://wa.me/5511999999999";
pub const PHONE_DISPLAY: &str = "(11) 99999-9999";
pub const PHONE_HREF: &str = "tel:+5511999999999";
pub const CONTACT_EMAIL: &str = "contato@3bus.com.br";
