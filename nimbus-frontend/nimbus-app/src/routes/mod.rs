pub mod about;
pub mod not_found;

pub mod legal {
    pub mod privacy_policy;
}
