mod components;
mod design;
mod examples;
mod icons;
mod mobile_components;

pub use components::ComponentsPage;
pub use design::DesignPage;
pub use examples::ExamplesPage;
pub use icons::IconsPage;
pub use mobile_components::MobileComponentsPage;
