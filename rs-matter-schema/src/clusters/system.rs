/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Node-level utility clusters: access control, commissioning,
//! networking, diagnostics, time, OTA and power source.

clusters! {
    AccessControl = 0x001F {
        attributes {
            0x0000 => Acl,
            0x0001 => Extension,
            0x0002 => SubjectsPerAccessControlEntry,
            0x0003 => TargetsPerAccessControlEntry,
            0x0004 => AccessControlEntriesPerFabric,
        }
        events {
            0x00 => AccessControlEntryChanged,
            0x01 => AccessControlExtensionChanged,
        }
        commands {}
    }

    BasicInformation = 0x0028 {
        attributes {
            0x0000 => DataModelRevision,
            0x0001 => VendorName,
            0x0002 => VendorID,
            0x0003 => ProductName,
            0x0004 => ProductID,
            0x0005 => NodeLabel,
            0x0006 => Location,
            0x0007 => HardwareVersion,
            0x0008 => HardwareVersionString,
            0x0009 => SoftwareVersion,
            0x000A => SoftwareVersionString,
            0x000B => ManufacturingDate,
            0x000C => PartNumber,
            0x000D => ProductURL,
            0x000E => ProductLabel,
            0x000F => SerialNumber,
            0x0010 => LocalConfigDisabled,
            0x0011 => Reachable,
            0x0012 => UniqueID,
            0x0013 => CapabilityMinima,
            0x0014 => ProductAppearance,
        }
        events {
            0x00 => StartUp,
            0x01 => ShutDown,
            0x02 => Leave,
            0x03 => ReachableChanged,
        }
        commands {
            0x00 => MfgSpecificPing,
        }
    }

    OtaSoftwareUpdateProvider = 0x0029 {
        attributes {}
        events {}
        commands {
            0x00 => QueryImage,
            0x02 => ApplyUpdateRequest,
            0x04 => NotifyUpdateApplied,
        }
    }

    OtaSoftwareUpdateRequestor = 0x002A {
        attributes {
            0x0000 => DefaultOTAProviders,
            0x0001 => UpdatePossible,
            0x0002 => UpdateState,
            0x0003 => UpdateStateProgress,
        }
        events {
            0x00 => StateTransition,
            0x01 => VersionApplied,
            0x02 => DownloadError,
        }
        commands {
            0x00 => AnnounceOTAProvider,
        }
    }

    LocalizationConfiguration = 0x002B {
        attributes {
            0x0000 => ActiveLocale,
            0x0001 => SupportedLocales,
        }
        events {}
        commands {}
    }

    TimeFormatLocalization = 0x002C {
        attributes {
            0x0000 => HourFormat,
            0x0001 => ActiveCalendarType,
            0x0002 => SupportedCalendarTypes,
        }
        events {}
        commands {}
    }

    UnitLocalization = 0x002D {
        attributes {
            0x0000 => TemperatureUnit,
        }
        events {}
        commands {}
    }

    PowerSourceConfiguration = 0x002E {
        attributes {
            0x0000 => Sources,
        }
        events {}
        commands {}
    }

    PowerSource = 0x002F {
        attributes {
            0x0000 => Status,
            0x0001 => Order,
            0x0002 => Description,
            0x0003 => WiredAssessedInputVoltage,
            0x0004 => WiredAssessedInputFrequency,
            0x0005 => WiredCurrentType,
            0x0006 => WiredAssessedCurrent,
            0x0007 => WiredNominalVoltage,
            0x0008 => WiredMaximumCurrent,
            0x0009 => WiredPresent,
            0x000A => ActiveWiredFaults,
            0x000B => BatVoltage,
            0x000C => BatPercentRemaining,
            0x000D => BatTimeRemaining,
            0x000E => BatChargeLevel,
            0x000F => BatReplacementNeeded,
            0x0010 => BatReplaceability,
            0x0011 => BatPresent,
            0x0012 => ActiveBatFaults,
            0x0013 => BatReplacementDescription,
            0x0014 => BatCommonDesignation,
            0x0015 => BatANSIDesignation,
            0x0016 => BatIECDesignation,
            0x0017 => BatApprovedChemistry,
            0x0018 => BatCapacity,
            0x0019 => BatQuantity,
            0x001A => BatChargeState,
            0x001B => BatTimeToFullCharge,
            0x001C => BatFunctionalWhileCharging,
            0x001D => BatChargingCurrent,
            0x001E => ActiveBatChargeFaults,
            0x001F => EndpointList,
        }
        events {
            0x00 => WiredFaultChange,
            0x01 => BatFaultChange,
            0x02 => BatChargeFaultChange,
        }
        commands {}
    }

    GeneralCommissioning = 0x0030 {
        attributes {
            0x0000 => Breadcrumb,
            0x0001 => BasicCommissioningInfo,
            0x0002 => RegulatoryConfig,
            0x0003 => LocationCapability,
            0x0004 => SupportsConcurrentConnection,
        }
        events {}
        commands {
            0x00 => ArmFailSafe,
            0x02 => SetRegulatoryConfig,
            0x04 => CommissioningComplete,
        }
    }

    NetworkCommissioning = 0x0031 {
        attributes {
            0x0000 => MaxNetworks,
            0x0001 => Networks,
            0x0002 => ScanMaxTimeSeconds,
            0x0003 => ConnectMaxTimeSeconds,
            0x0004 => InterfaceEnabled,
            0x0005 => LastNetworkingStatus,
            0x0006 => LastNetworkID,
            0x0007 => LastConnectErrorValue,
            0x0008 => SupportedWiFiBands,
            0x0009 => SupportedThreadFeatures,
            0x000A => ThreadVersion,
        }
        events {}
        commands {
            0x00 => ScanNetworks,
            0x02 => AddOrUpdateWiFiNetwork,
            0x03 => AddOrUpdateThreadNetwork,
            0x04 => RemoveNetwork,
            0x06 => ConnectNetwork,
            0x08 => ReorderNetwork,
        }
    }

    DiagnosticLogs = 0x0032 {
        attributes {}
        events {}
        commands {
            0x00 => RetrieveLogsRequest,
        }
    }

    GeneralDiagnostics = 0x0033 {
        attributes {
            0x0000 => NetworkInterfaces,
            0x0001 => RebootCount,
            0x0002 => UpTime,
            0x0003 => TotalOperationalHours,
            0x0004 => BootReason,
            0x0005 => ActiveHardwareFaults,
            0x0006 => ActiveRadioFaults,
            0x0007 => ActiveNetworkFaults,
            0x0008 => TestEventTriggersEnabled,
            0x0009 => AverageWearCount,
        }
        events {
            0x00 => HardwareFaultChange,
            0x01 => RadioFaultChange,
            0x02 => NetworkFaultChange,
            0x03 => BootReason,
        }
        commands {
            0x00 => TestEventTrigger,
            0x01 => TimeSnapshot,
        }
    }

    SoftwareDiagnostics = 0x0034 {
        attributes {
            0x0000 => ThreadMetrics,
            0x0001 => CurrentHeapFree,
            0x0002 => CurrentHeapUsed,
            0x0003 => CurrentHeapHighWatermark,
        }
        events {
            0x00 => SoftwareFault,
        }
        commands {
            0x00 => ResetWatermarks,
        }
    }

    ThreadNetworkDiagnostics = 0x0035 {
        attributes {
            0x0000 => Channel,
            0x0001 => RoutingRole,
            0x0002 => NetworkName,
            0x0003 => PanId,
            0x0004 => ExtendedPanId,
            0x0005 => MeshLocalPrefix,
            0x0006 => OverrunCount,
            0x0007 => NeighborTable,
            0x0008 => RouteTable,
            0x0009 => PartitionId,
            0x000A => Weighting,
            0x000B => DataVersion,
            0x000C => StableDataVersion,
            0x000D => LeaderRouterId,
            0x000E => DetachedRoleCount,
            0x000F => ChildRoleCount,
            0x0010 => RouterRoleCount,
            0x0011 => LeaderRoleCount,
            0x0012 => AttachAttemptCount,
            0x0013 => PartitionIdChangeCount,
            0x0014 => BetterPartitionAttachAttemptCount,
            0x0015 => ParentChangeCount,
            0x0016 => TxTotalCount,
            0x0017 => TxUnicastCount,
            0x0018 => TxBroadcastCount,
            0x0019 => TxAckRequestedCount,
            0x001A => TxAckedCount,
            0x001B => TxNoAckRequestedCount,
            0x001C => TxDataCount,
            0x001D => TxDataPollCount,
            0x001E => TxBeaconCount,
            0x001F => TxBeaconRequestCount,
            0x0020 => TxOtherCount,
            0x0021 => TxRetryCount,
            0x0022 => TxDirectMaxRetryExpiryCount,
            0x0023 => TxIndirectMaxRetryExpiryCount,
            0x0024 => TxErrCcaCount,
            0x0025 => TxErrAbortCount,
            0x0026 => TxErrBusyChannelCount,
            0x0027 => RxTotalCount,
            0x0028 => RxUnicastCount,
            0x0029 => RxBroadcastCount,
            0x002A => RxDataCount,
            0x002B => RxDataPollCount,
            0x002C => RxBeaconCount,
            0x002D => RxBeaconRequestCount,
            0x002E => RxOtherCount,
            0x002F => RxAddressFilteredCount,
            0x0030 => RxDestAddrFilteredCount,
            0x0031 => RxDuplicatedCount,
            0x0032 => RxErrNoFrameCount,
            0x0033 => RxErrUnknownNeighborCount,
            0x0034 => RxErrInvalidSrcAddrCount,
            0x0035 => RxErrSecCount,
            0x0036 => RxErrFcsCount,
            0x0037 => RxErrOtherCount,
            0x0038 => ActiveTimestamp,
            0x0039 => PendingTimestamp,
            0x003A => Delay,
            0x003B => SecurityPolicy,
            0x003C => ChannelPage0Mask,
            0x003D => OperationalDatasetComponents,
            0x003E => ActiveNetworkFaultsList,
        }
        events {
            0x00 => ConnectionStatus,
            0x01 => NetworkFaultChange,
        }
        commands {
            0x00 => ResetCounts,
        }
    }

    WiFiNetworkDiagnostics = 0x0036 {
        attributes {
            0x0000 => Bssid,
            0x0001 => SecurityType,
            0x0002 => WiFiVersion,
            0x0003 => ChannelNumber,
            0x0004 => Rssi,
            0x0005 => BeaconLostCount,
            0x0006 => BeaconRxCount,
            0x0007 => PacketMulticastRxCount,
            0x0008 => PacketMulticastTxCount,
            0x0009 => PacketUnicastRxCount,
            0x000A => PacketUnicastTxCount,
            0x000B => CurrentMaxRate,
            0x000C => OverrunCount,
        }
        events {
            0x00 => Disconnection,
            0x01 => AssociationFailure,
            0x02 => ConnectionStatus,
        }
        commands {
            0x00 => ResetCounts,
        }
    }

    EthernetNetworkDiagnostics = 0x0037 {
        attributes {
            0x0000 => PHYRate,
            0x0001 => FullDuplex,
            0x0002 => PacketRxCount,
            0x0003 => PacketTxCount,
            0x0004 => TxErrCount,
            0x0005 => CollisionCount,
            0x0006 => OverrunCount,
            0x0007 => CarrierDetect,
            0x0008 => TimeSinceReset,
        }
        events {}
        commands {
            0x00 => ResetCounts,
        }
    }

    TimeSynchronization = 0x0038 {
        attributes {
            0x0000 => UTCTime,
            0x0001 => Granularity,
            0x0002 => TimeSource,
            0x0003 => TrustedTimeSource,
            0x0004 => DefaultNTP,
            0x0005 => TimeZone,
            0x0006 => DSTOffset,
            0x0007 => LocalTime,
            0x0008 => TimeZoneDatabase,
            0x0009 => NTPServerAvailable,
            0x000A => TimeZoneListMaxSize,
            0x000B => DSTOffsetListMaxSize,
            0x000C => SupportsDNSResolve,
        }
        events {
            0x00 => DSTTableEmpty,
            0x01 => DSTStatus,
            0x02 => TimeZoneStatus,
            0x03 => TimeFailure,
            0x04 => MissingTrustedTimeSource,
        }
        commands {
            0x00 => SetUTCTime,
            0x01 => SetTrustedTimeSource,
            0x02 => SetTimeZone,
            0x04 => SetDSTOffset,
            0x05 => SetDefaultNTP,
        }
    }

    BridgedDeviceBasicInformation = 0x0039 {
        attributes {
            0x0001 => VendorName,
            0x0002 => VendorID,
            0x0003 => ProductName,
            0x0005 => NodeLabel,
            0x0007 => HardwareVersion,
            0x0008 => HardwareVersionString,
            0x0009 => SoftwareVersion,
            0x000A => SoftwareVersionString,
            0x000B => ManufacturingDate,
            0x000C => PartNumber,
            0x000D => ProductURL,
            0x000E => ProductLabel,
            0x000F => SerialNumber,
            0x0011 => Reachable,
            0x0012 => UniqueID,
            0x0014 => ProductAppearance,
        }
        events {
            0x00 => StartUp,
            0x01 => ShutDown,
            0x02 => Leave,
            0x03 => ReachableChanged,
        }
        commands {}
    }

    AdministratorCommissioning = 0x003C {
        attributes {
            0x0000 => WindowStatus,
            0x0001 => AdminFabricIndex,
            0x0002 => AdminVendorId,
        }
        events {}
        commands {
            0x00 => OpenCommissioningWindow,
            0x01 => OpenBasicCommissioningWindow,
            0x02 => RevokeCommissioning,
        }
    }

    OperationalCredentials = 0x003E {
        attributes {
            0x0000 => NOCs,
            0x0001 => Fabrics,
            0x0002 => SupportedFabrics,
            0x0003 => CommissionedFabrics,
            0x0004 => TrustedRootCertificates,
            0x0005 => CurrentFabricIndex,
        }
        events {}
        commands {
            0x00 => AttestationRequest,
            0x02 => CertificateChainRequest,
            0x04 => CSRRequest,
            0x06 => AddNOC,
            0x07 => UpdateNOC,
            0x09 => UpdateFabricLabel,
            0x0A => RemoveFabric,
            0x0B => AddTrustedRootCertificate,
        }
    }

    GroupKeyManagement = 0x003F {
        attributes {
            0x0000 => GroupKeyMap,
            0x0001 => GroupTable,
            0x0002 => MaxGroupsPerFabric,
            0x0003 => MaxGroupKeysPerFabric,
        }
        events {}
        commands {
            0x00 => KeySetWrite,
            0x01 => KeySetRead,
            0x03 => KeySetRemove,
            0x04 => KeySetReadAllIndices,
        }
    }

    ProxyConfiguration = 0x0042 {
        attributes {
            0x0000 => ConfigurationList,
        }
        events {}
        commands {}
    }

    ProxyDiscovery = 0x0043 {
        attributes {}
        events {}
        commands {}
    }

    ProxyValid = 0x0044 {
        attributes {}
        events {}
        commands {}
    }

    IcdManagement = 0x0046 {
        attributes {
            0x0000 => IdleModeDuration,
            0x0001 => ActiveModeDuration,
            0x0002 => ActiveModeThreshold,
            0x0003 => RegisteredClients,
            0x0004 => ICDCounter,
            0x0005 => ClientsSupportedPerFabric,
            0x0006 => UserActiveModeTriggerHint,
            0x0007 => UserActiveModeTriggerInstruction,
        }
        events {}
        commands {
            0x00 => RegisterClient,
            0x02 => UnregisterClient,
            0x03 => StayActiveRequest,
        }
    }
}
