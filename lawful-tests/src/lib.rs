pub mod broken;
pub mod samples;

#[cfg(test)]
mod apply;
#[cfg(test)]
mod category;
#[cfg(test)]
mod registry;
#[cfg(test)]
mod semigroup;
