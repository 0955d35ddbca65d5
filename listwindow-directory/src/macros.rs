#[cfg(feature = "tracing")]
macro_rules! dtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow_directory", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! dtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ddebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listwindow_directory", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ddebug {
    ($($tt:tt)*) => {};
}
