pub mod transform_photo_dto;
