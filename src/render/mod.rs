pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod painter;
#[cfg(test)]
pub(crate) mod recording;
