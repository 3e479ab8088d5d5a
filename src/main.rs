//! Browser entry point, built with Trunk (`trunk serve --features csr`).

fn main() {
    #[cfg(feature = "csr")]
    client::mount();
}
