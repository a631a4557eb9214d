use crate::cycler::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Unmount the current cycler and mount one for this variant.
    SelectVariant(Variant),
    Quit,
}
