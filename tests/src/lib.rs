#[cfg(test)]
mod language_equivalence;
#[cfg(test)]
mod pipeline;
