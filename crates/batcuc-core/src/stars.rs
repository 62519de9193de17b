//! Static catalog of the eight stars and their zero variants.
//!
//! Codes are stored in both digit orders with their per-direction energy, so
//! a pair and its reversal always resolve to the same star. Base codes never
//! contain `0` or `5`; those digits only appear in zero-variant codes or are
//! handled by the mapper's modifier rules.

use crate::types::{StarKey, StarNature};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A base star entry: one of the eight archetypes.
pub struct StarDef {
    pub key: StarKey,
    pub name: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub nature: StarNature,
    /// Canonical 2-digit codes (both directions) with their energy weight.
    pub codes: &'static [(&'static str, f64)],
}

/// A zero-variant entry: the mutated interpretation of a base star that
/// activates when a matched token carries a single literal `0`.
pub struct ZeroVariantDef {
    pub base: StarKey,
    pub name: &'static str,
    pub description: &'static str,
    pub detailed_description: &'static str,
    pub nature: StarNature,
    /// 3-digit codes (a base code padded with a `0`) with their energy.
    pub codes: &'static [(&'static str, f64)],
}

pub static STARS: [StarDef; 8] = [
    StarDef {
        key: StarKey::SinhKhi,
        name: "Sinh Khí",
        description: "Vui vẻ, quý nhân, dẫn đạo lực",
        detailed_description: "Tính cách lạc quan, nhìn mọi thứ rất thoáng, là người yên vui, lấy tâm bình tĩnh, bình thản để đối đãi, mọi thứ tuỳ duyên, không so đo cưỡng cầu.\n- Thích trợ giúp người khác, có nhiều nhân duyên và bạn bè tốt, bằng hữu nhiều. Không thích so đo và cứng nhắc.\n- Thường là người hoà giải, am hiểu giao tiếp tốt, kết nối giỏi. Dễ tiếp nhận thông tin mới.\n- Quý nhân mang tiền tài đến, có rất nhiều khoản tiền bất ngờ, thậm chí trúng số.\n- Tuy nhiên là người hơi lười thay đổi, an phận gặp sao yên vậy, không có chủ kiến.\n- Sự nghiệp gặp được nhiều quý nhân, gặp gữ thì hoá lành. Thích hợp làm công tác xã hội, PR.\n- Tình cảm không cưỡng cầu, tuỳ duyên, không so đo, mối quan hệ hài hoà, hôn nhân tương ứng ngọt ngào.\n- Sức khỏe cần lưu ý về bệnh dạ dày, tai mắt mũi.\n- Từ trường đem dữ hoá lành, trong nguy hiểm chắc chắn sẽ có hy vọng thoát khỏi.",
        nature: StarNature::Cat,
        codes: &[
            ("14", 4.0),
            ("41", 4.0),
            ("67", 3.0),
            ("76", 3.0),
            ("39", 2.0),
            ("93", 2.0),
            ("28", 1.0),
            ("82", 1.0),
        ],
    },
    StarDef {
        key: StarKey::ThienY,
        name: "Thiên Y",
        description: "Tiền tài, tình cảm, hồi báo",
        detailed_description: "Là tin tức trọng yếu khi một người muốn cầu tài hoặc tiêu tai bệnh tật. Thông minh, thiện lương, hào phóng, thích giúp đỡ người khác.\n- Tính tình rất giản đơn, không có tâm cơ thâm hiểm, hạnh phúc đôi lứa, hạnh phúc vợ chồng đều đoan chính.\n- Tiền kiếm được chân chính nhưng vì quá thiện lương cũng không thích so đo nên rất dễ bị lừa và lợi dụng.\n- Không màng danh lợi, không quá quan trọng đồng tiền, những khoản tiền nhỏ thường không chú ý nhiều.\n- Tiền tài đổ về từ tứ phương tám hướng, được hưởng sự đầy đủ, hạnh phúc.\n- Sự nghiệp có thể thành đại sự, lừng lẫy, trở thành ông chủ, lãnh đạo hoặc cánh tay đắc lực của doanh nghiệp.\n- Tình cảm chân chính, dễ kết hôn và dễ gặp đối tượng lý tưởng, tình cảm ân ái, ngọt ngào và lãng mạn.\n- Sức khỏe cần lưu ý vấn đề về huyết áp, tuần hoàn máu, bệnh tai mắt mũi.\n- Nhiều quý nhân lớn tuổi hơn, các bậc chú bác anh chị giúp đỡ che chở, bạn bè nhiều.",
        nature: StarNature::Cat,
        codes: &[
            ("13", 4.0),
            ("31", 4.0),
            ("68", 3.0),
            ("86", 3.0),
            ("49", 2.0),
            ("94", 2.0),
            ("27", 1.0),
            ("72", 1.0),
        ],
    },
    StarDef {
        key: StarKey::DienNien,
        name: "Diên Niên",
        description: "Năng lực chuyên nghiệp, công việc",
        detailed_description: "Thường là lãnh đạo, chúa tể một phương, không dễ thuyết phục, trừ khi ai đó năng lực cao hơn hẳn.\n- Là người có trách nhiệm, tâm lý vững vàng, lập trường ổn định, có cam đảm và đảm đương được.\n- Rất trọng chữ tín, đề cao trách nhiệm, đã nói là làm, tính tình kiên trì, nói 1 không 2.\n- Tâm địa thiện lương, kĩ tính không ẩu, xử lý công việc theo chính nghĩa, bảo vệ chính nghĩa.\n- Hay thích tiết kiệm tiền bạc, tính toán cẩn thận không ẩu, biết tiêu sài đúng nơi đúng chỗ.\n- Tài vận: Vất vả kiếm tiền, giữ tiền tốt, thích tính toán chi tiết tỉ mỉ, kĩ lưỡng. Quản lý tài sản rất kĩ.\n- Sự nghiệp: có năng lực chuyên nghiệp, làm lãnh đạo và kỹ thuật, mọi thứ tự thân, làm việc khá mệt nhọc.\n- Tình cảm: yêu cầu cao, tìm kiếm đối tượng rất khó khăn kĩ tính, đặt rất nặng công việc, cực kì chung thuỷ.\n- Sức khỏe: vất vả lâu ngày sinh bệnh tật, bệnh vai cổ gáy, giấc ngủ không tốt, tóc rụng nhiều, tinh thần áp lực.\n- Khuyết điểm: Sĩ diện, cái tôi mạnh, hay ung dung tự đắc ý, lý lẽ cứng nhắc, cố chấp, cực khổ, lao lực.",
        nature: StarNature::Cat,
        codes: &[
            ("19", 4.0),
            ("91", 4.0),
            ("78", 3.0),
            ("87", 3.0),
            ("34", 2.0),
            ("43", 2.0),
            ("26", 1.0),
            ("62", 1.0),
        ],
    },
    StarDef {
        key: StarKey::PhucVi,
        name: "Phục Vị",
        description: "chiu dung, kho thay doi",
        detailed_description: "Giỏi chịu đựng, có nghị lực hơn người, tiếng nói có sức ảnh hưởng, tiềm ẩn năng lực rất lớn.\n- Lập trường vững vàng, không dễ biến động, không thích bị nói đạo lý, mà phải làm gương tốt.\n- Thường lo lắng, không có cảm giác an toàn, khó đưa ra lựa chọn và rất cần sự cổ vũ động viên.\n- Sợ mạo hiểm, sợ tổn thương, hay bị chờ đợi quá lâu mất cơ hội. Quá bảo thủ chờ đợi, không dám hành động.\n- Tài vận: kiếm tiền khổ sở, phải đánh đổi nhiều vất vả, thích cầm tiền cố định và thu nhập ổn định.\n- Sự nghiệp: gò bó theo khuôn phép, khó thay đổi, thích hợp với công việc có tính ổn định cao.\n- Sức khỏe: bệnh về tim, não, lo nghĩ, hao tổn năng lượng ở 2 vùng này nhiều.\n- Đặc điểm: theo hung thì thì hung, theo cát thì cát. Hoặc người có vận số tốt thì sẽ tốt, người có vận số xấu thì càng trở lên chậm trễ.\n- Tình cảm: không tự ý chủ động yêu đương, cần có cảm giác yêu thương an toàn, tâm thái luôn đa nghi, thấp thỏm lo âu.\n- Người nhà sẽ là quý nhân tốt nhất.",
        nature: StarNature::CatHung,
        codes: &[
            ("11", 4.0),
            ("22", 4.0),
            ("33", 1.0),
            ("44", 1.0),
            ("66", 2.0),
            ("77", 2.0),
            ("88", 3.0),
            ("99", 3.0),
        ],
    },
    StarDef {
        key: StarKey::HoaHai,
        name: "Họa Hại",
        description: "Khẩu tài, chi tiêu lớn, lấy miệng là nghiệp",
        detailed_description: "Miệng lưỡi lưu loát, hùng biện giỏi, biết ăn nói, dùng miệng để kiếm ra tiền, ăn nói khéo léo, dễ đi vào lòng người.\n- Phù hợp làm thầy giáo, chuyên gia đào tạo, giảng dạy, lấy nghiệp ăn nói để kiếm ra tiền tài.\n- Tính tình nóng nảy nên hay cãi vã thị phi, ít người yêu mến, hay ốm yếu. Thẳng thắn, mạnh miệng, thích sĩ diện.\n- Hay gây gổ, làm mọi người khẩu phục và tâm không phục, thích để tâm vào chuyện vụn vặt.\n- Tài vận: mở miệng là có tiền, dễ vì cãi vã mà mất tiền, khó giữ tiền.\n- Tình cảm: đầu tiên thì ngon ngọt, sau đó thì dễ cãi vã thị phi, ly hôn.\n- Sức khỏe: bệnh ở khoang miệng, yếu hầu, họng, tuyến bạch huyết, lồng ngực, hao tổn nguyên khí.\n- Không có quý nhân, nhiều thị phi.\n- Học tập: rất giỏi học về ngôn ngữ, ngành nghề cần lấy tài ăn nói để kiếm ra tiền rất phù hợp.",
        nature: StarNature::Hung,
        codes: &[
            ("17", 4.0),
            ("71", 4.0),
            ("89", 3.0),
            ("98", 3.0),
            ("46", 2.0),
            ("64", 2.0),
            ("23", 1.0),
            ("32", 1.0),
        ],
    },
    StarDef {
        key: StarKey::LucSat,
        name: "Lục Sát",
        description: "Giao tế, phục vụ, cửa hàng, nữ nhân",
        detailed_description: "Kinh nghiệm bản thân tốt, nhân duyên tốt, nhất là với người khác phái, am hiểu giao tiếp, tiếp đãi và thiết lập mối quan hệ.\n- Đi ra ngoài biết cách giao thiệp, có thể là giao thiệp với nước ngoài. Tư duy tinh tế tỉ mỉ, giàu tình cảm.\n- Khuyết điểm: Hay nhạy cảm đa nghi, thích tưởng tượng và hay suy diễn, không quá quyết chắc chắn được.\n- Năng lực chịu đựng rất kém. Hay do dự, quá cẩn thận. Rất dễ u buồn, tự kỉ thậm chí tự sát.\n- Tình cảm: tình cảm phong phú đặc sắc, duyên với người khác phái rất mạnh, tính nết cẩn thận và nhạy cảm, hay khổ vì tình.\n- Tài vận: dựa vào mối quan hệ để kiếm tiền tốt, tiêu tiền cho gia đình và cũng không giữ được tiền.\n- Sự nghiệp: quan hệ xã hội, ngoại giao, nghề phục vụ hoặc làm đẹp, nghành nghề liên quan đến nữ tính, nghệ thuật.\n- Sức khỏe: bệnh về da, dạ dày, buồng trứng, nóng nảy, tự kỉ, u uất tinh thần.\n- Dễ được nhưng dễ mất, rất nhiều cơ hội sinh tiền tài, khéo léo có tiền, thích chưng diện, ăn mặc thời thượng.",
        nature: StarNature::Hung,
        codes: &[
            ("16", 4.0),
            ("61", 4.0),
            ("47", 3.0),
            ("74", 3.0),
            ("38", 2.0),
            ("83", 2.0),
            ("92", 1.0),
            ("29", 1.0),
        ],
    },
    StarDef {
        key: StarKey::NguQuy,
        name: "Ngũ Quỷ",
        description: "Trí óc, biến động, không ổn định, tư duy",
        detailed_description: "Thông minh, đa nghĩ, phản ứng nhanh, rất tài hoa hơn người, nhiều tài năng trời phú.\n- Tài vận: buôn bán, tâm linh tôn giáo là hợp lý.\n- Sự nghiệp: thường xuyên biến động, không chịu an phận, nên đi nhiều và làm các công việc buôn bán.\n- Tình cảm: Hay thay đổi, hay có tình tay ba, dễ ngoại tình, ly hôn. Tính cách rất đa nghi, không tin tưởng ai và không tâm sự cho ai.\n- Sức khỏe: dễ có bệnh tim, tuần hoàn máu, tai ương ngoài ý muốn. Bệnh tật rất dễ bộc phát, khi phát ra thì nặng.\n- Vì bản tình hay nghi ngờ, không tin người nên rất thiếu quý nhân.\n- Quản lý tài sản: quản lý rất mờ ám, công việc nếu có liên quan đến tiền thì khá ám muội.\n- Đối với ngũ quỷ phải hoàn toàn tán đồng, lắng nghe và tôn trọng, nếu không kiên nhẫn hoặc gây trở ngại sẽ bị phản ứng ngược lại.\n- Học tập: phản ứng nhanh nhẹn, có khả năng suy luận, có năng lực cực mạnh trong phương diện thưởng thức nghệ thuật.",
        nature: StarNature::Hung,
        codes: &[
            ("18", 4.0),
            ("81", 4.0),
            ("79", 3.0),
            ("97", 3.0),
            ("36", 2.0),
            ("63", 2.0),
            ("24", 1.0),
            ("42", 1.0),
        ],
    },
    StarDef {
        key: StarKey::TuyetMenh,
        name: "Tuyệt Mệnh",
        description: "Dốc sức, đầu tư, hành động, phá tài",
        detailed_description: "Phản ứng nhanh, sự nhạy cảm rất mạnh mẽ, tâm địa mềm mỏng và thiện lương, rất dễ tin người.\n- Dám mạo hiểm, có chí phấn đấu cố gắng. Tính cách thẳng thắn, trọng tình nghĩa, dễ kích động, rất nỗ lực phấn đấu.\n- Thích đầu tư, dễ có tài sản cố định nhưng thiếu tài sản, đầu tư cẩn thận mất mát.\n- Có sức phán đoán nhạy cảm, cần nhận được sự tán đồng, cá tính xung động, táo bạo, mạo hiểm, kiên trì.\n- Khuyết điểm: Rất dễ tin người, Không giữ được tiền, dễ bị mất của, phá tài. Tính tình bảo thủ, tự cho mình là nhất.\n- Tài vận: Không giữ được tiền, xuất tiền nhanh, dễ phá của phá tài, cần người hỗ trợ giữ tiền.\n- Sự nghiệp: Làm về đầu tư tài chính, liều lĩnh, cổ phiếu hoặc tự mình lập nghiệp, mạo hiểm.\n- Tình cảm: Dũng cảm đòi hỏi, nhưng sự cân bằng và cân đối kém, nên bất lợi cho hôn nhân, dễ ly hôn.\n- Sức khỏe: Bệnh gan, thận, tiểu đường, tai nạn xe cộ, chết ngoài ý muốn, ung thư.\n- Không có quý nhân tương trợ, mọi thứ tự thân, dễ có kiện cáo, dính dáng đến tranh chấp, hoặc hầu toà.",
        nature: StarNature::Hung,
        codes: &[
            ("12", 4.0),
            ("21", 4.0),
            ("69", 3.0),
            ("96", 3.0),
            ("84", 2.0),
            ("48", 2.0),
            ("73", 1.0),
            ("37", 1.0),
        ],
    },
];

pub static ZERO_VARIANTS: [ZeroVariantDef; 8] = [
    ZeroVariantDef {
        base: StarKey::SinhKhi,
        name: "Sinh Khí hoa hung",
        description: "Sinh Khí có số 0: Quí nhân hoá tiểu nhân, chiêu nạp người xấu về bên mình",
        detailed_description: "Tính cách lạc quan, nhìn mọi thứ rất thoáng, là người yên vui, lấy tâm bình tĩnh, bình thản để đối đãi, mọi thứ tuỳ duyên, không so đo cưỡng cầu.\n- Thích trợ giúp người khác, có nhiều nhân duyên và bạn bè tốt, bằng hữu nhiều. Không thích so đo và cứng nhắc.\n- Người tưởng tốt hóa ra có ý đồ xấu, người giúp đỡ lại khiến gặp rắc rối.\n- Dễ gặp phải người hai mặt, bề ngoài tốt nhưng có ý đồ lợi dụng.\n- Cần thận trọng khi tin tưởng người khác, đặc biệt là người mới quen.\n- Quý nhân có thể biến thành tiểu nhân, thường gặp phải người không thật lòng.",
        nature: StarNature::CatHoaHung,
        codes: &[
            ("140", 4.5),
            ("410", 4.5),
            ("104", 4.0),
            ("401", 4.0),
            ("670", 3.5),
            ("760", 3.5),
            ("607", 3.0),
            ("706", 3.0),
            ("930", 2.5),
            ("390", 2.5),
            ("903", 2.0),
            ("309", 2.0),
            ("820", 1.0),
            ("280", 1.0),
            ("802", 1.0),
            ("208", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::ThienY,
        name: "Thiên Y hoa hung",
        description: "Thiên Y có số 0: Đang có tiền thành mất tiền, lớn mất lớn, ít mất ít",
        detailed_description: "Thông minh, thiện lương, hào phóng, thích giúp đỡ người khác.\n- Tính tình rất giản đơn, không có tâm cơ thâm hiểm, hạnh phúc đôi lứa, hạnh phúc vợ chồng đều đoan chính.\n- Tiền kiếm được chân chính nhưng vì quá thiện lương cũng không thích so đo nên rất dễ bị lừa và lợi dụng.\n- Không màng danh lợi, không quá quan trọng đồng tiền, những khoản tiền nhỏ thường không chú ý nhiều.\n- Tiền tài đang được hưởng sẽ giảm sút hoặc mất đi.\n- Vận may về tài chính có thể suy giảm đáng kể.\n- Có thể có các tổn thất tài chính không lường trước được.",
        nature: StarNature::CatHoaHung,
        codes: &[
            ("130", 4.5),
            ("310", 4.5),
            ("103", 4.0),
            ("301", 4.0),
            ("680", 3.5),
            ("860", 3.5),
            ("608", 3.0),
            ("806", 3.0),
            ("940", 2.5),
            ("490", 2.5),
            ("904", 2.0),
            ("409", 2.0),
            ("720", 1.0),
            ("270", 1.0),
            ("702", 1.0),
            ("207", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::DienNien,
        name: "Diên Niên hoa hung",
        description: "Diên Niên có số 0: Làm việc nỗ lực mãi không thành, công việc cứ bị cản trở",
        detailed_description: "Thường là lãnh đạo, chúa tể một phương, không dễ thuyết phục, trừ khi ai đó năng lực cao hơn hẳn.\n- Là người có trách nhiệm, tâm lý vững vàng, lập trường ổn định, có cam đảm và đảm đương được.\n- Diên Niên có số 0: Làm việc nỗ lực mãi không thành, công việc cứ bị cản trở.\n- Mọi công sức bỏ ra thường không đạt được kết quả như mong muốn.\n- Thường xuyên gặp chướng ngại, trở ngại trong công việc và sự nghiệp.\n- Áp lực công việc lớn nhưng kết quả không tương xứng với nỗ lực bỏ ra.\n- Khó thăng tiến trong sự nghiệp, dễ bị người khác cản trở.",
        nature: StarNature::CatHoaHung,
        codes: &[
            ("190", 4.5),
            ("910", 4.5),
            ("109", 4.0),
            ("901", 4.0),
            ("780", 3.5),
            ("870", 3.5),
            ("708", 3.0),
            ("807", 3.0),
            ("340", 2.5),
            ("430", 2.5),
            ("304", 2.0),
            ("403", 2.0),
            ("260", 1.0),
            ("620", 1.0),
            ("206", 1.0),
            ("602", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::PhucVi,
        name: "Phục Vị",
        description: "Phục Vị có số 0: Trì trệ, chờ đợi, không thay đổi, dễ bỏ lỡ cơ hội",
        detailed_description: "Giỏi chịu đựng, có nghị lực hơn người, tiếng nói có sức ảnh hưởng, tiềm ẩn năng lực rất lớn.\n- Lập trường vững vàng, không dễ biến động, không thích bị nói đạo lý, mà phải làm gương tốt.\n- Khó hòa nhập với môi trường mới, thích giữ nguyên hiện trạng.\n- Lo lắng quá mức, thường xuyên bỏ lỡ cơ hội tốt.\n- Sự nghiệp khó phát triển, dễ rơi vào tình trạng bế tắc.\n- Dễ bỏ lỡ những cơ hội tốt vì quá thận trọng và không dám quyết định.",
        nature: StarNature::CatHungHoaHung,
        codes: &[
            ("110", 4.5),
            ("220", 4.5),
            ("990", 3.5),
            ("880", 3.5),
            ("101", 4.0),
            ("202", 4.0),
            ("808", 3.0),
            ("909", 3.0),
            ("707", 2.0),
            ("606", 2.0),
            ("303", 1.0),
            ("404", 1.0),
            ("330", 1.5),
            ("440", 1.5),
        ],
    },
    ZeroVariantDef {
        base: StarKey::HoaHai,
        name: "Họa Hại",
        description: "Họa Hại có số 0: Ân bệnh, không bộc phát, nếu bộc phát sẽ rất nhanh",
        detailed_description: "Miệng lưỡi lưu loát, hùng biện giỏi, biết ăn nói, dùng miệng để kiếm ra tiền, ăn nói khéo léo, dễ đi vào lòng người.\n- Phù hợp làm thầy giáo, chuyên gia đào tạo, giảng dạy, lấy nghiệp ăn nói để kiếm ra tiền tài.\n- Họa Hại có số 0: Ân bệnh, không bộc phát, nếu bộc phát sẽ rất nhanh. Họa thị phi, kiện cáo, cãi vã, có thể gây kiện cáo kéo dài.\n- Có nguy cơ mắc bệnh tiềm ẩn không phát hiện sớm, khi phát bệnh thì diễn biến nhanh, nghiêm trọng.\n- Dễ gặp phải rắc rối về pháp lý, tranh chấp, kiện tụng kéo dài.\n- Dễ vướng vào các cuộc tranh cãi, thị phi không đáng có.\n- Lời nói có thể gây ra hậu quả nghiêm trọng không lường trước.",
        nature: StarNature::HungHoaHung,
        codes: &[
            ("170", 4.5),
            ("710", 4.5),
            ("107", 4.0),
            ("701", 4.0),
            ("890", 3.5),
            ("980", 3.5),
            ("809", 3.0),
            ("908", 3.0),
            ("460", 2.5),
            ("640", 2.5),
            ("406", 2.0),
            ("604", 2.0),
            ("230", 1.5),
            ("320", 1.5),
            ("203", 1.0),
            ("302", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::LucSat,
        name: "Lục Sát hoa hung",
        description: "Lục Sát có số 0: U buồn tình cảm, ly thân/ly hôn, mất tiền cho nữ nhân",
        detailed_description: "Kinh nghiệm bản thân tốt, nhân duyên tốt, nhất là với người khác phái, am hiểu giao tiếp.\n- Tình cảm dễ gặp trắc trở, u buồn, không như ý.\n- Nguy cơ cao về đổ vỡ hôn nhân, chia tay, ly thân.\n- Cẩn thận khi cho nữ giới vay tiền hoặc đầu tư vào dự án của phụ nữ.\n- Có thể mất tiền vì các mối quan hệ tình cảm hoặc với phụ nữ.\n- Tâm trạng dễ u uất, tự kỷ, trầm cảm khi gặp vấn đề về tình cảm.",
        nature: StarNature::HungHoaHung,
        codes: &[
            ("160", 4.5),
            ("610", 4.5),
            ("106", 4.0),
            ("601", 4.0),
            ("470", 3.5),
            ("740", 3.5),
            ("407", 3.0),
            ("704", 3.0),
            ("380", 2.5),
            ("830", 2.5),
            ("308", 2.0),
            ("803", 2.0),
            ("290", 1.5),
            ("920", 1.5),
            ("209", 1.0),
            ("902", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::NguQuy,
        name: "Ngũ Quỷ hoa hung",
        description: "Ngũ Quỷ có số 0: Hay có tiêu cực, áp lực, thăng trầm biến động, dễ mất tiền",
        detailed_description: "Thông minh, đa nghĩ, phản ứng nhanh, rất tài hoa hơn người, nhiều tài năng trời phú.\n- Thường xuyên gặp trở ngại, khó khăn bất ngờ trong cuộc sống và công việc.\n- Tâm trạng thường không ổn định, dễ bị căng thẳng, áp lực, bi quan.\n- Có nguy cơ cao về tai nạn, mất mát tài sản, đầu tư thất bại.\n- Tư duy tiêu cực, lo lắng quá mức, dễ dẫn đến các quyết định sai lầm.\n- Không nên đầu tư mạo hiểm, dễ gặp rủi ro lớn.",
        nature: StarNature::HungHoaHung,
        codes: &[
            ("180", 4.5),
            ("810", 4.5),
            ("108", 4.0),
            ("801", 4.0),
            ("790", 3.5),
            ("970", 3.5),
            ("709", 3.0),
            ("907", 3.0),
            ("360", 2.5),
            ("630", 2.5),
            ("306", 2.0),
            ("603", 2.0),
            ("240", 1.5),
            ("420", 1.5),
            ("204", 1.0),
            ("402", 1.0),
        ],
    },
    ZeroVariantDef {
        base: StarKey::TuyetMenh,
        name: "Tuyệt Mệnh hoa hung",
        description: "Tuyệt Mệnh có số 0: Đầu tư thất bại, bệnh dễ phát nặng, dễ có tai nạn xe cộ",
        detailed_description: "Phản ứng nhanh, sự nhạy cảm rất mạnh mẽ, tâm địa mềm mỏng và thiện lương, rất dễ tin người.\n- Sức khỏe dễ gặp vấn đề nghiêm trọng, bệnh tật nặng.\n- Đầu tư thường mang lại kết quả không tốt, thua lỗ.\n- Cần đặc biệt chú ý khi tham gia giao thông vì nguy cơ tai nạn cao.\n- Nếu là nữ, có thể gặp khó khăn trong việc mang thai hoặc nuôi dạy con cái.\n- Tiền bạc tiêu hao nhanh, khó tích lũy, dễ mất tài sản lớn.",
        nature: StarNature::HungHoaHung,
        codes: &[
            ("120", 4.5),
            ("210", 4.5),
            ("102", 4.0),
            ("201", 4.0),
            ("690", 3.5),
            ("960", 3.5),
            ("609", 3.0),
            ("906", 3.0),
            ("480", 2.5),
            ("840", 2.5),
            ("408", 2.0),
            ("804", 2.0),
            ("370", 1.5),
            ("730", 1.5),
            ("307", 1.0),
            ("703", 1.0),
        ],
    },
];

static CODE_INDEX: Lazy<HashMap<&'static str, (&'static StarDef, f64)>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for star in STARS.iter() {
        for &(code, energy) in star.codes {
            map.insert(code, (star, energy));
        }
    }
    map
});

static VARIANT_CODE_INDEX: Lazy<HashMap<&'static str, (&'static ZeroVariantDef, f64)>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        for variant in ZERO_VARIANTS.iter() {
            for &(code, energy) in variant.codes {
                map.insert(code, (variant, energy));
            }
        }
        map
    });

/// Resolves a base star descriptor by key. `Unknown` has no descriptor.
pub fn star(key: StarKey) -> Option<&'static StarDef> {
    STARS.iter().find(|s| s.key == key)
}

/// Resolves the zero variant paired with a base star, if the catalog has one.
pub fn zero_variant(base: StarKey) -> Option<&'static ZeroVariantDef> {
    ZERO_VARIANTS.iter().find(|v| v.base == base)
}

/// Looks up a clean 2-digit pair against the base catalog. Both digit orders
/// are stored, so `lookup_pair("41")` and `lookup_pair("14")` hit the same
/// star.
pub fn lookup_pair(pair: &str) -> Option<(&'static StarDef, f64)> {
    CODE_INDEX.get(pair).copied()
}

/// Looks up a literal 3-digit zero-variant code.
pub fn lookup_variant_code(code: &str) -> Option<(&'static ZeroVariantDef, f64)> {
    VARIANT_CODE_INDEX.get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_14_is_sinh_khi_energy_four() {
        let (star, energy) = lookup_pair("14").unwrap();
        assert_eq!(star.key, StarKey::SinhKhi);
        assert_eq!(energy, 4.0);
        assert_eq!(star.nature, StarNature::Cat);
    }

    #[test]
    fn reversal_resolves_to_same_star() {
        for star in STARS.iter() {
            for &(code, _) in star.codes {
                let reversed: String = code.chars().rev().collect();
                let (found, _) = lookup_pair(&reversed)
                    .unwrap_or_else(|| panic!("missing reversal for {}", code));
                assert_eq!(found.key, star.key, "reversal of {} changed star", code);
            }
        }
    }

    #[test]
    fn base_codes_never_contain_zero_or_five() {
        for star in STARS.iter() {
            for &(code, _) in star.codes {
                assert!(!code.contains('0') && !code.contains('5'), "bad code {}", code);
            }
        }
    }

    #[test]
    fn every_variant_code_contains_a_zero() {
        for variant in ZERO_VARIANTS.iter() {
            for &(code, _) in variant.codes {
                assert!(code.contains('0'), "variant code {} has no zero", code);
                assert_eq!(code.len(), 3);
            }
        }
    }

    #[test]
    fn every_base_star_has_a_zero_variant() {
        for key in StarKey::ALL {
            assert!(zero_variant(key).is_some(), "no variant for {}", key);
        }
    }

    #[test]
    fn variant_code_140_carries_boosted_energy() {
        let (variant, energy) = lookup_variant_code("140").unwrap();
        assert_eq!(variant.base, StarKey::SinhKhi);
        assert_eq!(energy, 4.5);
        assert_eq!(variant.nature, StarNature::CatHoaHung);
    }
}
