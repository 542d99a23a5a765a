//! app-web - gRPC sample server

pub mod api;
pub mod application;

// Proto generated code modules
pub mod greeting {
    pub mod v1 {
        tonic::include_proto!("greeting.v1");
    }
}

pub mod product {
    pub mod v1 {
        tonic::include_proto!("product.v1");
    }
}

pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("app_web_descriptor");
