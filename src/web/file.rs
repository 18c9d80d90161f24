//! Browser `File` as an [`ImageFile`].

use web_sys::File;

use crate::error::AnalysisError;
use crate::file::ImageFile;

impl ImageFile for File {
    fn name(&self) -> String {
        File::name(self)
    }

    fn media_type(&self) -> String {
        self.type_()
    }

    async fn read_preview(&self) -> Result<String, AnalysisError> {
        woundscan_dom::read_as_data_url(self)
            .await
            .map_err(|e| AnalysisError::Preview(e.to_string()))
    }
}
