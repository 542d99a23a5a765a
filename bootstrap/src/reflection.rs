//! gRPC reflection helpers

pub use tonic_reflection::server::Builder;
pub use tonic_reflection::server::v1::{ServerReflection, ServerReflectionServer};

/// Build a reflection service over the given encoded file descriptor sets
pub fn build_reflection(
    file_descriptor_sets: Vec<&'static [u8]>,
) -> Result<ServerReflectionServer<impl ServerReflection>, Box<dyn std::error::Error>> {
    let mut builder = Builder::configure();
    for fds in file_descriptor_sets {
        builder = builder.register_encoded_file_descriptor_set(fds);
    }
    Ok(builder.build_v1()?)
}
