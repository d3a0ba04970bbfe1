pub mod params;
pub mod response;

pub use params::PaginationParams;
pub use response::{
    ApiResponse, CreatedResponseDto, ErrorDetail, ErrorResponseDto, ListResponse, Pagination,
    SuccessResponseDto,
};
